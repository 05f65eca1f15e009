use super::*;

fn render(view: impl FnOnce() -> String) -> String {
    let owner = Owner::new();
    owner.with(view)
}

#[test]
fn server_render_is_visible() {
    let html = render(|| view! { <AnimatedSection>"Selected work"</AnimatedSection> }.to_html());
    assert!(html.contains("Selected work"));
    assert!(html.contains("opacity:1;"));
    assert!(!html.contains("opacity:0;"));
}

#[test]
fn server_render_keeps_class_and_variant() {
    let html = render(|| {
        view! { <AnimatedSection variant=SectionVariant::Pop class="contact-success">"Sent"</AnimatedSection> }.to_html()
    });
    assert!(html.contains("animated-section contact-success"));
    assert!(html.contains("opacity:1;"));
}
