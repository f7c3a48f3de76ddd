pub mod pages;

use dioxus::prelude::*;
use pages::Home;
use serde_json::json;
use tracing::info;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

/// schema.org description of the business, embedded as JSON-LD
pub fn business_structured_data() -> serde_json::Value {
    json!({
        "@context": "https://schema.org",
        "@type": "LocalBusiness",
        "name": "Moe Balloons Event",
        "description": "Professional balloon decorations and event planning services",
        "url": "https://moeballoonsevent.com",
        "telephone": "+1-555-123-4567",
        "email": "hello@moeballoonsevent.com",
        "address": {
            "@type": "PostalAddress",
            "addressLocality": "Metro Area",
            "addressCountry": "US"
        },
        "serviceArea": {
            "@type": "GeoCircle",
            "geoMidpoint": {
                "@type": "GeoCoordinates",
                "latitude": "40.7128",
                "longitude": "-74.0060"
            },
            "geoRadius": "50000"
        },
        "priceRange": "$$",
        "openingHours": "Mo-Su 09:00-18:00"
    })
}

#[component]
pub fn App() -> Element {
    // Runs after `launch` has installed the logger
    use_hook(|| info!("Moe Balloons site mounted"));
    let structured_data = business_structured_data().to_string();

    rsx! {
        document::Title { "Moe Balloons Event | Balloon Decorations & Event Planning" }
        document::Meta {
            name: "description",
            content: "Professional balloon decorations for weddings, birthdays, corporate events and more.",
        }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        document::Script { r#type: "application/ld+json", "{structured_data}" }
        div { class: "min-h-screen", Home {} }
    }
}
