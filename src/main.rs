fn main() {
    if let Err(err) = hero_image_gen::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
