//! Single-page marketing site

use dioxus::prelude::*;
use moe_ui::Gallery;

use super::SiteHeader;

struct Service {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const SERVICES: [Service; 6] = [
    Service {
        icon: "💒",
        title: "Wedding Decorations",
        description: "Elegant balloon arches, centerpieces, and romantic setups for your special day",
    },
    Service {
        icon: "🎂",
        title: "Birthday Parties",
        description: "Fun and colorful balloon arrangements that make birthdays unforgettable",
    },
    Service {
        icon: "🏢",
        title: "Corporate Events",
        description: "Professional balloon displays for grand openings, conferences, and company celebrations",
    },
    Service {
        icon: "🎓",
        title: "Graduations",
        description: "Celebrate achievements with custom balloon decorations in school colors",
    },
    Service {
        icon: "👶",
        title: "Baby Showers",
        description: "Sweet and gentle balloon designs perfect for welcoming new arrivals",
    },
    Service {
        icon: "🎉",
        title: "Custom Events",
        description: "Unique balloon creations tailored to your specific theme and vision",
    },
];

struct Testimonial {
    name: &'static str,
    event: &'static str,
    text: &'static str,
    rating: usize,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Johnson",
        event: "Wedding",
        text: "Absolutely stunning! The balloon arch was the perfect backdrop for our wedding photos. Moe's attention to detail is incredible.",
        rating: 5,
    },
    Testimonial {
        name: "Mike Chen",
        event: "Corporate Event",
        text: "Professional, creative, and on-time. The balloon decorations made our product launch truly memorable.",
        rating: 5,
    },
    Testimonial {
        name: "Emily Rodriguez",
        event: "Birthday Party",
        text: "My daughter's unicorn-themed party was magical thanks to Moe's beautiful balloon creations. Highly recommended!",
        rating: 5,
    },
];

#[component]
pub fn Home() -> Element {
    rsx! {
        SiteHeader {}
        main {
            Hero {}
            Services {}
            GallerySection {}
            Testimonials {}
            Contact {}
        }
        Footer {}
    }
}

#[component]
fn SectionHeading(title: String, subtitle: String, #[props(default)] light: bool) -> Element {
    let (title_color, subtitle_color) = if light {
        ("text-white", "text-pink-100")
    } else {
        ("text-gray-900", "text-gray-600")
    };

    rsx! {
        div { class: "text-center mb-16",
            h2 { class: "text-3xl md:text-4xl font-bold {title_color} mb-4", "{title}" }
            p { class: "text-xl {subtitle_color} max-w-2xl mx-auto", "{subtitle}" }
        }
    }
}

#[component]
fn Hero() -> Element {
    rsx! {
        section { id: "home", class: "pt-16 pb-20 px-4 sm:px-6 lg:px-8",
            div { class: "max-w-7xl mx-auto text-center",
                div { class: "relative inline-block",
                    h1 { class: "text-4xl md:text-6xl lg:text-7xl font-bold text-gray-900 mb-6",
                        "Make Every Event"
                        span { class: "block bg-gradient-to-r from-pink-500 via-purple-500 to-blue-500 bg-clip-text text-transparent",
                            "Magical"
                        }
                    }
                    div {
                        class: "absolute -top-4 -right-4 text-6xl animate-bounce",
                        "aria-hidden": "true",
                        "🎈"
                    }
                }
                p { class: "text-xl md:text-2xl text-gray-600 mb-8 max-w-3xl mx-auto",
                    "Professional balloon decorations and event planning services that transform ordinary moments into extraordinary memories"
                }
                div { class: "flex flex-col sm:flex-row gap-4 justify-center",
                    a {
                        href: "#contact",
                        class: "bg-gradient-to-r from-pink-500 to-purple-600 text-white px-8 py-4 rounded-full text-lg font-semibold hover:shadow-xl transition-all transform hover:scale-105",
                        "Get Free Quote"
                    }
                    a {
                        href: "#gallery",
                        class: "border-2 border-pink-500 text-pink-500 px-8 py-4 rounded-full text-lg font-semibold hover:bg-pink-500 hover:text-white transition-all",
                        "View Gallery"
                    }
                }
            }
        }
    }
}

#[component]
fn Services() -> Element {
    rsx! {
        section { id: "services", class: "py-20 bg-white",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                SectionHeading {
                    title: "Our Services",
                    subtitle: "From intimate gatherings to grand celebrations, we create stunning balloon decorations for every occasion",
                }
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8",
                    for service in SERVICES.iter() {
                        div {
                            key: "{service.title}",
                            class: "bg-gradient-to-br from-pink-50 to-purple-50 p-8 rounded-2xl hover:shadow-xl transition-all transform hover:scale-105",
                            div { class: "text-4xl mb-4", "aria-hidden": "true", "{service.icon}" }
                            h3 { class: "text-xl font-bold text-gray-900 mb-3", "{service.title}" }
                            p { class: "text-gray-600", "{service.description}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn GallerySection() -> Element {
    rsx! {
        section {
            id: "gallery",
            class: "py-20 bg-gradient-to-br from-purple-50 to-pink-50",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                SectionHeading {
                    title: "Our Work",
                    subtitle: "Take a look at some of our recent balloon decoration projects",
                }
                Gallery {}
            }
        }
    }
}

#[component]
fn Testimonials() -> Element {
    rsx! {
        section { id: "testimonials", class: "py-20 bg-white",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                SectionHeading {
                    title: "What Our Clients Say",
                    subtitle: "Do not just take our word for it - hear from our satisfied customers",
                }
                div { class: "grid grid-cols-1 md:grid-cols-3 gap-8",
                    for testimonial in TESTIMONIALS.iter() {
                        figure {
                            key: "{testimonial.name}",
                            class: "bg-gradient-to-br from-pink-50 to-purple-50 p-8 rounded-2xl",
                            div {
                                class: "flex mb-4",
                                "aria-label": "{testimonial.rating} out of 5 stars",
                                for i in 0..testimonial.rating {
                                    span { key: "{i}", class: "text-yellow-400 text-xl", "aria-hidden": "true", "⭐" }
                                }
                            }
                            blockquote { class: "text-gray-700 mb-6 italic", "“{testimonial.text}”" }
                            figcaption {
                                p { class: "font-semibold text-gray-900", "{testimonial.name}" }
                                p { class: "text-sm text-gray-600", "{testimonial.event}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ContactItem(icon: String, label: String, value: String, #[props(default)] href: Option<String>) -> Element {
    rsx! {
        div { class: "flex items-center",
            span { class: "text-2xl mr-4", "aria-hidden": "true", "{icon}" }
            div {
                p { class: "font-semibold", "{label}" }
                if let Some(href) = href {
                    a { href, class: "text-pink-100 hover:text-white underline-offset-2 hover:underline", "{value}" }
                } else {
                    p { class: "text-pink-100", "{value}" }
                }
            }
        }
    }
}

/// Fields of the enquiry form, in display order
#[derive(Clone, Copy, PartialEq)]
enum ContactField {
    Name,
    Email,
    EventType,
    Message,
}

const CONTACT_FIELDS: [ContactField; 4] = [
    ContactField::Name,
    ContactField::Email,
    ContactField::EventType,
    ContactField::Message,
];

impl ContactField {
    fn name(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::EventType => "event_type",
            ContactField::Message => "message",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            ContactField::Name => "Your Name",
            ContactField::Email => "Your Email",
            ContactField::EventType => "Event Type",
            ContactField::Message => "Tell us about your event...",
        }
    }

    fn input_type(self) -> &'static str {
        match self {
            ContactField::Email => "email",
            _ => "text",
        }
    }
}

const FIELD_CLASS: &str = "w-full px-4 py-3 rounded-lg bg-white/20 border border-white/30 text-white placeholder-pink-100 focus:outline-none focus:ring-2 focus:ring-white/50";

/// Enquiry form markup. Submission is not wired to any backend.
#[component]
fn ContactForm() -> Element {
    rsx! {
        form {
            class: "space-y-6",
            "aria-label": "Event enquiry",
            onsubmit: move |evt| evt.prevent_default(),
            for field in CONTACT_FIELDS {
                div { key: "{field.name()}",
                    if field == ContactField::Message {
                        textarea {
                            name: field.name(),
                            rows: "4",
                            placeholder: field.placeholder(),
                            "aria-label": field.placeholder(),
                            class: "{FIELD_CLASS} resize-none",
                        }
                    } else {
                        input {
                            r#type: field.input_type(),
                            name: field.name(),
                            placeholder: field.placeholder(),
                            "aria-label": field.placeholder(),
                            class: FIELD_CLASS,
                        }
                    }
                }
            }
            button {
                r#type: "submit",
                class: "w-full bg-white text-purple-600 px-6 py-3 rounded-lg font-semibold hover:bg-pink-50 transition-colors",
                "Send Message"
            }
        }
    }
}

#[component]
fn Contact() -> Element {
    rsx! {
        section {
            id: "contact",
            class: "py-20 bg-gradient-to-br from-pink-500 to-purple-600",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                SectionHeading {
                    title: "Let us Create Magic Together",
                    subtitle: "Ready to transform your event? Get in touch for a free consultation and quote",
                    light: true,
                }
                div { class: "grid grid-cols-1 lg:grid-cols-2 gap-12",
                    div { class: "text-white",
                        h3 { class: "text-2xl font-bold mb-6", "Get In Touch" }
                        div { class: "space-y-4",
                            ContactItem {
                                icon: "📞",
                                label: "Phone",
                                value: "+1 (555) 123-4567",
                                href: "tel:+15551234567".to_string(),
                            }
                            ContactItem {
                                icon: "📧",
                                label: "Email",
                                value: "hello@moeballoonsevent.com",
                                href: "mailto:hello@moeballoonsevent.com".to_string(),
                            }
                            ContactItem {
                                icon: "📍",
                                label: "Location",
                                value: "Serving the Greater Metro Area",
                            }
                        }
                    }
                    div { class: "bg-white/10 backdrop-blur-md p-8 rounded-2xl", ContactForm {} }
                }
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        footer { class: "bg-gray-900 text-white py-12",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center",
                h3 { class: "text-2xl font-bold bg-gradient-to-r from-pink-400 to-purple-400 bg-clip-text text-transparent mb-4",
                    "Moe Balloons Event"
                }
                p { class: "text-gray-400 mb-6",
                    "Creating magical moments with beautiful balloon decorations"
                }
                p { class: "text-gray-500 text-sm", "© 2025 Moe Balloons Event. All rights reserved." }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_form_fields() {
        let names: Vec<&str> = CONTACT_FIELDS.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["name", "email", "event_type", "message"]);
        assert_eq!(ContactField::Email.input_type(), "email");
        assert_eq!(ContactField::Message.placeholder(), "Tell us about your event...");
    }
}
