use std::process::ExitCode;

pub mod config;
pub mod crawler;
pub mod declare;
pub mod error;
pub mod logging;
pub mod util;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    let report = match crawler::coingecko::visit(&config::SETTINGS.coingecko).await {
        Ok(report) => report,
        Err(why) => {
            logging::error_file_async(format!("Failed to fetch the bitcoin price because {:?}", why));
            // 失敗時は診断メッセージを一行だけ出す
            println!("ビットコイン価格の取得中にエラーが発生しました: {why}");
            return ExitCode::FAILURE;
        }
    };

    match report.to_pretty_json() {
        Ok(json) => println!("{json}"),
        Err(why) => {
            logging::error_file_async(format!("Failed to serialize the price report because {:?}", why));
            println!("ビットコイン価格の取得中にエラーが発生しました: {why}");
            return ExitCode::FAILURE;
        }
    }

    println!("\n{}", report.summary());

    ExitCode::SUCCESS
}
