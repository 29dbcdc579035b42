use clap::Args;
use linkograph::config::Config;
use linkograph::error::LgResult;
use linkograph::server;
use std::net::{IpAddr, SocketAddr};

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(long, default_value = "127.0.0.1")]
    pub host: IpAddr,

    #[arg(long, default_value_t = 5000)]
    pub port: u16,
}

pub async fn run(args: ServeArgs, config: Config) -> LgResult<()> {
    let addr = SocketAddr::new(args.host, args.port);
    server::serve(addr, config.regression).await
}
