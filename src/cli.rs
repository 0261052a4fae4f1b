//! Command-line arguments.
//!
//! ```text
//! airlaunch [--switch-from-classic | --configure-widget <ID> |
//!            --set-language <CODE> | --set-base-currency <CODE> | <DEEPLINK>]
//! ```

use al_core::LaunchIntent;
use clap::{ArgGroup, Parser};

use crate::bootstrap::LaunchRequest;

/// Action tag used when the host forwards a deeplink.
pub const ACTION_VIEW: &str = "view";

#[derive(Debug, Parser)]
#[command(name = "airlaunch")]
#[command(about = "Launch the Classic or Air surface", long_about = None)]
#[command(group(
    ArgGroup::new("request").args([
        "switch_from_classic",
        "configure_widget",
        "set_language",
        "set_base_currency",
        "deeplink",
    ])
))]
pub struct Cli {
    /// Enter Air on behalf of the Classic surface
    #[arg(long)]
    switch_from_classic: bool,

    /// Present the configuration surface for a home-screen widget
    #[arg(long, value_name = "ID", allow_negative_numbers = true)]
    configure_widget: Option<i32>,

    /// Store the display language and reload widgets
    #[arg(long, value_name = "CODE")]
    set_language: Option<String>,

    /// Store the base currency and reload widgets
    #[arg(long, value_name = "CODE")]
    set_base_currency: Option<String>,

    /// Deeplink forwarded by the host
    #[arg(value_name = "DEEPLINK")]
    deeplink: Option<String>,
}

impl Cli {
    pub fn into_request(self) -> LaunchRequest {
        if self.switch_from_classic {
            return LaunchRequest::SwitchFromClassic;
        }
        if let Some(widget_id) = self.configure_widget {
            return LaunchRequest::ConfigureWidget { widget_id };
        }
        if let Some(lang_code) = self.set_language {
            return LaunchRequest::SetLanguage { lang_code };
        }
        if let Some(currency) = self.set_base_currency {
            return LaunchRequest::SetBaseCurrency { currency };
        }

        match self.deeplink {
            Some(data) => {
                let mut intent = LaunchIntent::with_data(data);
                intent.action = Some(ACTION_VIEW.to_string());
                LaunchRequest::Main(intent)
            }
            None => LaunchRequest::Main(LaunchIntent::default()),
        }
    }
}
