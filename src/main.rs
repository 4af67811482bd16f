fn main() -> Result<(), Box<dyn std::error::Error>> {
    schedcard::runtime::run()
}
