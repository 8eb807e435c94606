fn main() {
    parrot::run();
}
