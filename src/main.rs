fn main() {
    webstore_ui::start();
}
