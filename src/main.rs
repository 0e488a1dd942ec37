fn main() {
    if let Err(err) = user_report::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
