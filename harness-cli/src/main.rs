fn main() -> anyhow::Result<()> {
    cssbench_cli::main()
}
