use std::sync::Arc;

use stockdeck_core::{
    ApiClient, ApiConfig, Dashboard, HistoryForm, RegionId, Regions, ReqwestHttpClient,
    ResultKind, SaveForm,
};

use crate::cli::{Cli, Command};
use crate::sink::TerminalSink;

/// Build the dashboard for this invocation and run the selected command,
/// returning the final display state of its region.
pub async fn run(cli: &Cli) -> ResultKind {
    let config = ApiConfig::new(cli.base_url.clone()).with_timeout_ms(cli.timeout_ms);
    let client = ApiClient::new(config, Arc::new(ReqwestHttpClient::new()));

    let mut regions = Regions::new();
    for id in RegionId::ALL {
        regions = regions.register(id, Arc::new(TerminalSink::new(id)));
    }
    regions.verify();

    let dashboard = Dashboard::new(client, regions);

    match &cli.command {
        Command::Save(args) => {
            let form = SaveForm {
                symbol: args.symbol.clone(),
                price: args.price.clone(),
                volume: args.volume.clone(),
                change: args.change.clone(),
                change_percent: args.change_percent.clone(),
            };
            dashboard.save_price(&form).await
        }
        Command::Price(args) => dashboard.latest_price(&args.symbol).await,
        Command::History(args) => {
            let form = HistoryForm {
                symbol: args.symbol.clone(),
                days: args.days.clone(),
                limit: args.limit.clone(),
            };
            dashboard.history(&form).await
        }
        Command::Analyze(args) => dashboard.analyze(&args.symbol).await,
        Command::Portfolio => dashboard.portfolio().await,
        Command::Fetch(args) => dashboard.external_fetch(&args.symbol).await,
    }
}
