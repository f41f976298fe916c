//! Reporting example: moves a learnuplet to done and posts its result

use morpheo_orchestrator_client::prelude::*;
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logger
    env_logger::init();

    let config = ClientConfig::from_env();
    println!("Reporting to orchestrator at {}", config.base_url());

    let api = OrchestratorApi::new(config);
    let learnuplet = Uuid::new_v4();

    api.report_status(UpletType::Learn, UpletStatus::Pending, learnuplet)
        .await?;

    let result = serde_json::json!({ "perf": 0.87, "train_perf": { "fold-1": 0.91 } });
    match api
        .post_learn_result(learnuplet, result_reader(serde_json::to_vec(&result)?))
        .await
    {
        Ok(()) => {
            api.report_status(UpletType::Learn, UpletStatus::Done, learnuplet)
                .await?;
            println!("Learnuplet {} done", learnuplet);
        }
        Err(e) => {
            eprintln!("Error posting learn result: {}", e);
            api.report_status(UpletType::Learn, UpletStatus::Failed, learnuplet)
                .await?;
        }
    }

    Ok(())
}
