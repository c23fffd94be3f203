//! Page-level tests: delegated routing across both controllers

use gallery_types::{GalleryConfig, LightboxConfig};

use crate::config::ConfigError;
use crate::gallery::{Gallery, Routed};
use crate::lightbox::OverlayState;
use crate::testing::{FakeDom, NodeId};

struct StockPage {
    dom: FakeDom,
    wrapper: NodeId,
    nature_btn: NodeId,
    city_btn: NodeId,
    sections: Vec<NodeId>,
    images: Vec<NodeId>,
}

/// Two filter buttons, three sections ("nature", "city", "nature"), each
/// with one image inside an `.image-grid`.
fn stock_page() -> StockPage {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let dom = FakeDom::new();
    let body = dom.body_id();

    let header = dom.element(body, "header");
    let button = |key: &str| {
        let b = dom.element(header, "button");
        dom.add_class(b, "filter-btn");
        dom.set_attr(b, "data-filter", key);
        // Label span, so clicks can land on a child of the button
        dom.element(b, "span");
        b
    };
    let nature_btn = button("nature");
    let city_btn = button("city");

    let wrapper = dom.element(body, "div");
    dom.set_attr(wrapper, "id", "gallery-section");

    let mut sections = Vec::new();
    let mut images = Vec::new();
    for (i, category) in ["nature", "city", "nature"].iter().enumerate() {
        let section = dom.element(wrapper, "section");
        dom.add_class(section, "gallery");
        dom.set_attr(section, "data-category", category);
        let grid = dom.element(section, "div");
        dom.add_class(grid, "image-grid");
        let img = dom.element(grid, "img");
        dom.set_attr(img, "src", &format!("/img/{}.jpg", (b'a' + i as u8) as char));
        dom.set_attr(img, "alt", &format!("{category} {i}"));
        sections.push(section);
        images.push(img);
    }

    StockPage {
        dom,
        wrapper,
        nature_btn,
        city_btn,
        sections,
        images,
    }
}

fn gallery(page: &StockPage) -> Gallery<FakeDom> {
    let gallery = Gallery::new(page.dom.clone(), GalleryConfig::default()).unwrap();
    gallery.initialize();
    gallery
}

fn visible(page: &StockPage) -> Vec<bool> {
    page.sections
        .iter()
        .map(|s| page.dom.display(*s).as_deref() == Some("block"))
        .collect()
}

#[test]
fn test_initialize_reports_clean_markup() {
    let page = stock_page();
    let gallery = Gallery::new(page.dom.clone(), GalleryConfig::default()).unwrap();

    let report = gallery.initialize();

    assert!(report.is_clean(), "{report:?}");
    assert!(gallery.lightbox().is_live());
    // Startup never touches filter state
    assert_eq!(page.dom.display(page.wrapper), None);
}

#[test]
fn test_nature_scenario_through_click() {
    let page = stock_page();
    let gallery = gallery(&page);

    assert_eq!(gallery.handle_click(&page.nature_btn), Routed::Trigger);

    assert_eq!(visible(&page), vec![true, false, true]);
    assert_eq!(page.dom.display(page.wrapper).as_deref(), Some("block"));
    assert!(page.dom.has_class(page.nature_btn, "active"));
    assert!(!page.dom.has_class(page.city_btn, "active"));
}

#[test]
fn test_click_on_button_label_resolves_trigger() {
    let page = stock_page();
    let gallery = gallery(&page);
    let label = page.dom.children(page.city_btn)[0];

    assert_eq!(gallery.handle_click(&label), Routed::Trigger);
    assert_eq!(visible(&page), vec![false, true, false]);
    assert!(page.dom.has_class(page.city_btn, "active"));
}

#[test]
fn test_unrelated_click_is_ignored() {
    let page = stock_page();
    let gallery = gallery(&page);

    assert_eq!(gallery.handle_click(&page.wrapper), Routed::Ignored);
    assert_eq!(gallery.handle_click(&page.dom.body_id()), Routed::Ignored);
    assert_eq!(page.dom.display(page.wrapper), None);
    assert_eq!(gallery.lightbox().state(), OverlayState::Hidden);
}

#[test]
fn test_image_then_overlay_click() {
    let page = stock_page();
    let gallery = gallery(&page);
    let overlay = gallery.lightbox().overlay().unwrap();

    assert_eq!(gallery.handle_click(&page.images[0]), Routed::Image);
    assert!(page.dom.has_class(overlay, "active"));
    let shown = page.dom.children(overlay);
    assert_eq!(shown.len(), 1);
    assert_eq!(page.dom.attr(shown[0], "src").as_deref(), Some("/img/a.jpg"));

    assert_eq!(gallery.handle_click(&overlay), Routed::Overlay);
    assert!(!page.dom.has_class(overlay, "active"));
    assert_eq!(gallery.lightbox().state(), OverlayState::Hidden);
}

// Open decision point: the enlarged image has no click handler of its own,
// so clicking it closes the overlay. `dismiss_on_image_click = false`
// switches to backdrop-only dismissal.
#[test]
fn test_click_on_enlarged_image_closes_overlay() {
    let page = stock_page();
    let gallery = gallery(&page);
    let overlay = gallery.lightbox().overlay().unwrap();

    gallery.handle_click(&page.images[1]);
    let enlarged = page.dom.children(overlay)[0];

    assert_eq!(gallery.handle_click(&enlarged), Routed::Overlay);
    assert!(!gallery.lightbox().is_shown());
}

#[test]
fn test_click_on_enlarged_image_with_backdrop_only() {
    let page = stock_page();
    let config = GalleryConfig {
        lightbox: LightboxConfig {
            dismiss_on_image_click: false,
            ..LightboxConfig::default()
        },
        ..GalleryConfig::default()
    };
    let gallery = Gallery::new(page.dom.clone(), config).unwrap();
    gallery.initialize();
    let overlay = gallery.lightbox().overlay().unwrap();

    gallery.handle_click(&page.images[1]);
    let enlarged = page.dom.children(overlay)[0];

    // Routed to the overlay, never mistaken for a gallery image
    assert_eq!(gallery.handle_click(&enlarged), Routed::Overlay);
    assert!(gallery.lightbox().is_shown());
    assert_eq!(page.dom.children(overlay), vec![enlarged]);

    gallery.handle_click(&overlay);
    assert!(!gallery.lightbox().is_shown());
}

#[test]
fn test_escape_key() {
    let page = stock_page();
    let gallery = gallery(&page);

    gallery.handle_click(&page.images[2]);
    assert!(!gallery.handle_key("Enter"));
    assert!(gallery.lightbox().is_shown());
    assert!(gallery.handle_key("Escape"));
    assert!(!gallery.lightbox().is_shown());
    assert!(!gallery.handle_key("Escape"));
}

#[test]
fn test_controllers_are_independent() {
    let page = stock_page();
    let gallery = gallery(&page);

    gallery.handle_click(&page.city_btn);
    gallery.handle_click(&page.images[0]);
    gallery.handle_click(&gallery.lightbox().overlay().unwrap());

    assert_eq!(visible(&page), vec![false, true, false]);
    assert!(page.dom.has_class(page.city_btn, "active"));
    assert_eq!(gallery.filter().selected().map(String::from), Some("city".to_string()));
}

#[test]
fn test_elements_added_after_initialize_are_handled() {
    let page = stock_page();
    let gallery = gallery(&page);

    // New category, button and image appear after startup
    let header = page.dom.parent(page.nature_btn).unwrap();
    let street_btn = page.dom.element(header, "button");
    page.dom.add_class(street_btn, "filter-btn");
    page.dom.set_attr(street_btn, "data-filter", "street");

    let section = page.dom.element(page.wrapper, "section");
    page.dom.add_class(section, "gallery");
    page.dom.set_attr(section, "data-category", "street");
    let grid = page.dom.element(section, "div");
    page.dom.add_class(grid, "image-grid");
    let img = page.dom.element(grid, "img");
    page.dom.set_attr(img, "src", "/img/street.jpg");

    gallery.handle_click(&page.nature_btn);
    assert_eq!(gallery.handle_click(&street_btn), Routed::Trigger);
    assert!(page.dom.has_class(street_btn, "active"));
    assert!(!page.dom.has_class(page.nature_btn, "active"));
    assert_eq!(page.dom.display(section).as_deref(), Some("block"));
    assert_eq!(visible(&page), vec![false, false, false]);

    assert_eq!(gallery.handle_click(&img), Routed::Image);
    let overlay = gallery.lightbox().overlay().unwrap();
    let enlarged = page.dom.children(overlay)[0];
    assert_eq!(page.dom.attr(enlarged, "src").as_deref(), Some("/img/street.jpg"));
}

#[test]
fn test_images_ignored_when_lightbox_disabled() {
    let page = stock_page();
    let config = GalleryConfig {
        lightbox: LightboxConfig {
            enabled: false,
            ..LightboxConfig::default()
        },
        ..GalleryConfig::default()
    };
    let gallery = Gallery::new(page.dom.clone(), config).unwrap();
    gallery.initialize();

    assert_eq!(gallery.handle_click(&page.images[0]), Routed::Ignored);
    assert!(page.dom.query_ids("#lightbox").is_empty());
}

#[test]
fn test_invalid_config_rejected() {
    let page = stock_page();
    let mut config = GalleryConfig::default();
    config.filter.content_selector.clear();

    let result = Gallery::new(page.dom.clone(), config);

    assert!(matches!(
        result,
        Err(ConfigError::Empty {
            field: "filter.content_selector"
        })
    ));
}

#[test]
fn test_reinitialize_keeps_single_overlay() {
    let page = stock_page();
    let gallery = gallery(&page);
    let overlay = gallery.lightbox().overlay();

    gallery.initialize();

    assert_eq!(gallery.lightbox().overlay(), overlay);
    assert_eq!(page.dom.query_ids("#lightbox").len(), 1);
}

#[test]
fn test_two_galleries_share_overlay_element() {
    let page = stock_page();
    let first = gallery(&page);
    let second = gallery(&page);

    assert_eq!(first.lightbox().overlay(), second.lightbox().overlay());
    assert_eq!(page.dom.query_ids("#lightbox").len(), 1);
}
