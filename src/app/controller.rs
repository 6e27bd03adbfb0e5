use crate::config::Config;
use crate::error::Result;
use crate::fetch::RecommendationClient;
use crate::ui::run_wizard;
use crate::wizard::{Step, Wizard};

/// Owns the wizard for one session and hands it to the TUI flow.
pub struct AppController {
    client: RecommendationClient,
}

impl AppController {
    pub fn new(config: &Config) -> Result<Self> {
        let client = RecommendationClient::new(config.endpoint()?);
        Ok(Self { client })
    }

    pub async fn run(self) -> Result<()> {
        let mut wizard = Wizard::new();
        run_wizard(&mut wizard, &self.client).await?;

        if wizard.step() == Step::Results {
            println!("{}", summary(&wizard));
        }
        Ok(())
    }
}

/// Plain-text recap printed once the alternate screen is gone.
fn summary(wizard: &Wizard) -> String {
    let items = wizard.recommendations();
    let mut lines = vec![format!("Received {} recommendation(s):", items.len())];
    lines.extend(
        items
            .iter()
            .map(|item| format!("  - {} ({})", item.name, item.brand)),
    );
    lines.join("\n")
}
