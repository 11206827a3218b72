fn main() -> anyhow::Result<()> {
    inkshop_observability::init();

    inkshop_app::run()
}
