//! The [`ScrollBumper`] divider component.

use dioxus::prelude::*;

use crate::progress::DASH_COUNT;

/// A full-width horizontal divider: two dashed segments flanking an optional
/// centered label, each overlaid with a progress fill whose horizontal scale
/// tracks how far the divider has traveled through the viewport.
///
/// The dashes and label fade in once at least 20% of the element is visible;
/// the fill collapses to zero whenever the element is out of view. Both fills
/// are driven by the same progress value, so the two sides always mirror each
/// other. Transitions themselves are CSS; the component only supplies state.
#[component]
pub fn ScrollBumper(
    /// Extra classes appended to the root container.
    #[props(default)]
    class: String,
    /// Label rendered centered between the segments, styled uppercase.
    title: Option<String>,
    /// DOM id for the root element.
    id: Option<String>,
) -> Element {
    let is_visible = use_signal(|| false);
    let scroll_progress = use_signal(|| 0.0f64);

    #[cfg(target_arch = "wasm32")]
    let mut listeners = use_signal(|| None::<crate::listeners::ViewportListeners>);

    // Dropping the signal's contents on unmount detaches both subscriptions.
    let onmounted = move |event: MountedEvent| {
        #[cfg(target_arch = "wasm32")]
        {
            use dioxus_web::WebEventExt;
            if let Some(element) = event.try_as_web_event() {
                listeners.set(crate::listeners::ViewportListeners::attach(
                    element,
                    is_visible,
                    scroll_progress,
                ));
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = event;
    };

    let visible = is_visible();
    let fill = if visible { scroll_progress() } else { 0.0 };
    let title_state = if visible {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-2"
    };

    // Omitted entirely when there is no title; uppercasing is display-only.
    let label = title.map(|title| {
        rsx! {
            div { class: "transition-all duration-700 {title_state}",
                span { class: "font-medium text-xs text-foreground/80 uppercase tracking-wider whitespace-nowrap",
                    "{title}"
                }
            }
        }
    });

    rsx! {
        div { id, class: "w-full py-6 relative {class}", onmounted: onmounted,
            div { class: "flex items-center justify-center w-full gap-4",
                {dash_segment(Side::Left, visible, fill)}
                div { class: "px-2", {label} }
                {dash_segment(Side::Right, visible, fill)}
            }
        }
    }
}

#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

/// One dashed segment plus its progress fill, anchored at the outer edge.
fn dash_segment(side: Side, visible: bool, fill: f64) -> Element {
    let line_opacity = if visible { "opacity-100" } else { "opacity-0" };
    let (align, anchor, origin) = match side {
        Side::Left => ("left-0", "left-0", "origin-left"),
        Side::Right => ("right-0 justify-end", "right-0", "origin-right"),
    };

    rsx! {
        div { class: "h-[4px] flex-grow relative overflow-hidden",
            div { class: "absolute top-0 {align} h-[4px] w-full flex gap-[6px] transition-opacity duration-700 {line_opacity}",
                for i in 0..DASH_COUNT {
                    div { key: "{i}", class: "h-full w-[12px] bg-foreground/30 rounded-full" }
                }
            }
            div { class: "absolute top-0 left-0 w-full h-[4px]",
                div {
                    class: "absolute top-0 {anchor} h-[4px] bg-foreground/80 rounded-full transition-transform duration-1000 ease-out {origin}",
                    style: "width: 100%; transform: scaleX({fill})",
                }
            }
        }
    }
}
