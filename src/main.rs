fn main() -> anyhow::Result<()> {
    wellpulse_lib::run()
}
