fn main() {
    if let Err(e) = formdeck::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
