use carsea::app;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let opts = app::parse_args(std::env::args().skip(1));
    if opts.show_help {
        print!("{}", app::USAGE);
        return Ok(());
    }
    if opts.show_version {
        println!("carsea {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    app::run(opts).await
}
