//! User badge showing a profile image or initials.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::util::avatar::initials;
use crate::util::presentation::AvatarSize;

/// Round user badge.
///
/// Falls back to initials when no `src` is given or the image fails to load.
/// `name` may be reactive so a badge can render before the user is known.
#[component]
pub fn Avatar(
    #[prop(into)] name: Signal<String>,
    #[prop(optional, into)] src: Option<String>,
    #[prop(optional)] size: AvatarSize,
) -> impl IntoView {
    let image_failed = RwSignal::new(false);
    let letters = Memo::new(move |_| name.with(|n| initials(n)));
    let px = size.pixels().to_string();

    view! {
        <span class=size.class() title=name>
            {move || match src.clone().filter(|_| !image_failed.get()) {
                Some(url) => view! {
                    <img
                        class="avatar__image"
                        src=url
                        alt=name
                        width=px.clone()
                        height=px.clone()
                        on:error=move |_| image_failed.set(true)
                    />
                }
                .into_any(),
                None => view! {
                    <span class="avatar__initials" aria-hidden="true">{letters}</span>
                }
                .into_any(),
            }}
        </span>
    }
}
