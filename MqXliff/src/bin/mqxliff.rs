fn main() -> anyhow::Result<()> {
    mqxliff::cli::run_cli()
}
