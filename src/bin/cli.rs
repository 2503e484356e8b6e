use miette::Result;

fn main() -> Result<()> {
    landing::cli::run()
}
