fn main() {
    factory_injector::app::cli::run();
}
