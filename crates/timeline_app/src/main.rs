fn main() -> anyhow::Result<()> {
    timeline_app::platform::run_app()
}
