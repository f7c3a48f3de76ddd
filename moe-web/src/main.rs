//! Moe Balloons site - web entry point

fn main() {
    dioxus::launch(moe_web::App);
}
