fn main() {
    dioxus::launch(supper_web::App);
}
