fn main() {
    showreel::run();
}
