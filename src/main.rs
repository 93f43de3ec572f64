fn main() {
    autoload::autoload::cli::run()
}
