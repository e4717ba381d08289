fn main() {
    feed_frontend::start();
}
