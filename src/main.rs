use std::collections::VecDeque;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use nutri_dash_rs::api::ApiClient;
use nutri_dash_rs::cli::{Cli, Command};
use nutri_dash_rs::error::{AppError, Result};
use nutri_dash_rs::interface::{prompts, render};
use nutri_dash_rs::models::BmiReport;
use nutri_dash_rs::view::{Effect, Panel, UiEvent, ViewController};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();
    let client = ApiClient::new(&cli.server);

    match command {
        Command::Dashboard => cmd_dashboard(&client, &cli.server).await,
        Command::Bmi { weight, height } => cmd_bmi(&client, weight, height).await,
    }
}

/// One-shot BMI check.
async fn cmd_bmi(client: &ApiClient, weight: f64, height: f64) -> Result<()> {
    if weight <= 0.0 || height <= 0.0 {
        return Err(AppError::InvalidInput(
            "weight and height must be positive".to_string(),
        ));
    }

    let bmi = client.calculate_bmi(weight, height).await?;
    render::display_bmi(&BmiReport::from_value(bmi));
    Ok(())
}

/// The interactive panel loop. All work is triggered by menu actions; each
/// action becomes an event, and every effect the controller asks for is
/// executed here in order.
async fn cmd_dashboard(client: &ApiClient, server: &str) -> Result<()> {
    info!(server, "starting dashboard");

    let mut controller = ViewController::new(Panel::Profile);
    show_panel(&controller, controller.active_panel());

    loop {
        match prompts::main_menu()? {
            prompts::MenuAction::EditProfile => {
                for edit in prompts::collect_profile_edits(controller.form())? {
                    dispatch(&mut controller, client, UiEvent::Edit(edit)).await?;
                }
            }
            prompts::MenuAction::CalculateBmi => {
                dispatch(&mut controller, client, UiEvent::CalculateBmi).await?;
            }
            prompts::MenuAction::GenerateRecommendations => {
                dispatch(&mut controller, client, UiEvent::GenerateRecommendations).await?;
            }
            prompts::MenuAction::ShowPanel(panel) => {
                dispatch(&mut controller, client, UiEvent::SelectPanel(panel)).await?;
            }
            prompts::MenuAction::Quit => break,
        }
    }

    Ok(())
}

/// Execute one event and everything it causes. Fetch effects run against
/// the backend and their results feed back in as response events.
async fn dispatch(
    controller: &mut ViewController,
    client: &ApiClient,
    event: UiEvent,
) -> Result<()> {
    let mut queue = VecDeque::new();
    queue.push_back(event);

    while let Some(event) = queue.pop_front() {
        for effect in controller.handle(event) {
            match effect {
                Effect::FetchBmi { weight, height } => {
                    let result = client.calculate_bmi(weight, height).await;
                    queue.push_back(UiEvent::BmiLoaded(result));
                }
                Effect::FetchRecommendations(profile) => {
                    let result = client.generate_recommendations(&profile).await;
                    queue.push_back(UiEvent::RecommendationsLoaded(result));
                }
                Effect::FetchVisualization => {
                    let result = client.visualization_data().await;
                    queue.push_back(UiEvent::VisualizationLoaded(result));
                }
                Effect::ShowPanel(panel) => show_panel(controller, panel),
                Effect::ShowLoading => render::display_loading(),
                Effect::HideLoading => {}
                Effect::ShowBmi(report) => render::display_bmi(&report),
                Effect::RenderRecommendations => {
                    if let Some(response) = controller.recommendation() {
                        render::display_recommendations(response);
                    }
                }
                Effect::RenderCharts => render::display_charts(controller.charts()),
                Effect::ShowError(message) => {
                    render::display_error(&message);
                    prompts::acknowledge_error()?;
                    queue.push_back(UiEvent::DismissError);
                }
                Effect::CloseError => {}
            }
        }
    }

    Ok(())
}

fn show_panel(controller: &ViewController, panel: Panel) {
    render::display_panel(
        panel,
        controller.form(),
        controller.bmi(),
        controller.recommendation(),
    );
}
