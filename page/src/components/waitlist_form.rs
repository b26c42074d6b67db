//! Email capture form.
//!
//! Each instance owns its own [`WaitlistState`]; two forms on one page never
//! see each other's input or status.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::Icon;
use crate::content::{IconKind, WaitlistCopy};
use crate::hook::{FormId, SubmitHook};
use crate::theme::{FormVariant, Palette, ThemeTokens};
use crate::waitlist::{SubmitStatus, WaitlistState};

#[component]
pub fn WaitlistForm(
    copy: WaitlistCopy,
    #[prop(optional)] variant: FormVariant,
    #[prop(default = Palette::Emerald.tokens())] tokens: ThemeTokens,
    /// Register with this hook so callers outside the form can submit it
    #[prop(optional)]
    hook: Option<SubmitHook>,
    /// State to drive this form with; a fresh one per instance when omitted
    #[prop(optional)]
    state: Option<RwSignal<WaitlistState>>,
) -> impl IntoView {
    let state = state.unwrap_or_else(|| RwSignal::new(WaitlistState::new()));
    let form_id = FormId::next();

    if let Some(hook) = hook {
        hook.register(
            form_id,
            move || state.try_update(|s| s.submit().is_ok()).unwrap_or(false),
            move || state.try_with_untracked(|s| s.has_input()).unwrap_or(false),
        );
        on_cleanup(move || {
            hook.release(form_id);
        });
    }

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        state.update(|s| {
            let _ = s.submit();
        });
    };

    let input_class = variant.input_class(&tokens);
    let button_class = variant.button_class(&tokens);
    let WaitlistCopy {
        placeholder,
        button_label,
        anchor,
    } = copy;

    view! {
        <form
            id=anchor
            class="flex flex-wrap gap-4 items-center"
            data-status=move || state.with(|s| s.status().as_str())
            novalidate=true
            on:submit=on_submit
        >
            <div class=input_class>
                <input
                    type="email"
                    name="email"
                    autocomplete="email"
                    placeholder=placeholder
                    class="w-full h-full outline-none text-base text-slate-900 placeholder:text-slate-400 bg-transparent"
                    prop:value=move || state.with(|s| s.email().to_string())
                    on:input=move |ev| state.update(|s| s.update_email(event_target_value(&ev)))
                />
            </div>
            <button type="submit" class=button_class>
                {button_label}
                <Icon kind=IconKind::ArrowRight class="w-5 h-5" />
            </button>
            {move || {
                state.with(|s| {
                    (s.status() != SubmitStatus::Idle).then(|| {
                        let class = format!("w-full text-sm {}", variant.message_class(s.status()));
                        let message = s.message().to_string();
                        view! { <div class=class role="status">{message}</div> }
                    })
                })
            }}
        </form>
    }
}
