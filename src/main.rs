fn main() -> anyhow::Result<()> {
    linesweep::cli::run()
}
