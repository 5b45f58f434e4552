use dioxus::prelude::*;
use dioxus_scroll_bumper::ScrollBumper;
use pretty_assertions::assert_eq;

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn title_renders_once_with_uppercase_styling() {
    fn app() -> Element {
        rsx! {
            ScrollBumper { title: "Chapter One" }
        }
    }

    let html = render(app);
    // The text itself is untransformed; uppercasing is display-only.
    assert_eq!(html.matches("Chapter One").count(), 1);
    assert!(!html.contains("CHAPTER ONE"));
    assert!(html.contains("uppercase"));
}

#[test]
fn no_label_without_title() {
    fn app() -> Element {
        rsx! {
            ScrollBumper {}
        }
    }

    let html = render(app);
    assert!(!html.contains("<span"));
}

#[test]
fn initial_render_is_hidden_with_zero_fill() {
    fn app() -> Element {
        rsx! {
            ScrollBumper {}
        }
    }

    let html = render(app);
    // Both fill bars collapsed, both dash rows faded out.
    assert_eq!(html.matches("scaleX(0)").count(), 2);
    assert_eq!(html.matches("opacity-0").count(), 2);
    assert_eq!(html.matches("origin-left").count(), 1);
    assert_eq!(html.matches("origin-right").count(), 1);
}

#[test]
fn twenty_dashes_per_segment() {
    fn app() -> Element {
        rsx! {
            ScrollBumper {}
        }
    }

    let html = render(app);
    assert_eq!(html.matches("w-[12px]").count(), 40);
}

#[test]
fn id_and_class_pass_through_to_the_root() {
    fn app() -> Element {
        rsx! {
            ScrollBumper { id: "intermission", class: "my-8" }
        }
    }

    let html = render(app);
    assert!(html.contains(r#"id="intermission""#));
    assert!(html.contains("w-full py-6 relative my-8"));
}
