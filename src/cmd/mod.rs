mod runtime_error;
mod terminal;

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

pub use runtime_error::RuntimeError;
pub use terminal::TerminalView;

use crate::config::Config;
use crate::credentials::Credentials;
use crate::form::{FormController, FormView, HtmlView, LoginOutcome};
#[cfg(feature = "log")]
use crate::logger;
use crate::net::HttpTransport;
use crate::soap::{SoapClient, SoapError, SoapRequest};
#[allow(unused_imports)]
#[cfg(not(feature = "log"))]
use crate::{debug, info, warn};
#[allow(unused_imports)]
#[cfg(feature = "log")]
use log::{debug, info, warn};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "icuLogin",
    about = "sign in to the ICUTech test service and show what it answers",
    version = env!("CARGO_PKG_VERSION"),
)]
pub struct Cmd {
    #[arg(long, help = "Select different config file")]
    config: Option<String>,
    #[cfg(feature = "log")]
    #[arg(short, action = clap::ArgAction::Count, help = "Set verbosity level")]
    debug: u8,
    #[arg(short, long, help = "Don't log anything, hide the loading indicator")]
    quiet: bool,
    #[arg(
        short = 'n',
        long,
        help = "Send to stdout the generated SOAP request without sending it"
    )]
    dry: bool,
    #[arg(long, help = "Print the message region as HTML")]
    html: bool,
    #[arg(short, long, help = "Login name, read from stdin if missing")]
    login: Option<String>,
    #[arg(short, long, help = "Password, read from stdin if missing")]
    password: Option<String>,
}

impl Cmd {
    pub fn load_cfg(&self) -> Result<Config, RuntimeError> {
        self.load_cfg_in(home_dir().as_deref())
    }

    /// `load_cfg` with the search rooted at `home` instead of the user's home.
    pub fn load_cfg_in(&self, home: Option<&Path>) -> Result<Config, RuntimeError> {
        if let Some(f) = &self.config {
            return Ok(Config::try_from(f.as_str())?);
        }
        info!("config not specified, searching default locations");
        let found = home.map(Config::search_paths).unwrap_or_default();
        debug!("found configurations: {:?}", found);
        let Some(selected) = found.into_iter().next() else {
            info!("no configuration found, using built-in endpoints");
            return Ok(Config::default());
        };
        let default = Config::default_path(home.map(Path::to_path_buf));
        if selected != default {
            warn!("configuration is not in the default location ({:?})", default);
        }
        debug!("selecting configuration: {:?}", selected);
        Ok(Config::try_from(selected.to_string_lossy().into_owned())?)
    }

    fn read_field(given: &Option<String>, name: &'static str) -> Result<String, RuntimeError> {
        if let Some(v) = given {
            return Ok(v.clone())
        }
        eprint!("{}: ", name);
        std::io::stderr().flush()?;
        let mut line = String::new();
        if std::io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(RuntimeError::MissingInput(name))
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_owned())
    }

    async fn submit_with<V: FormView>(
        view: V,
        client: SoapClient<HttpTransport>,
        login: &str,
        password: &str,
    ) -> (Result<LoginOutcome, SoapError>, V) {
        let controller = FormController::new(view, client);
        let result = controller.submit(login, password).await;
        (result, controller.into_view())
    }

    pub async fn main(&self) -> Result<(), RuntimeError> {
        #[cfg(feature = "log")]
        logger::init(self.debug, self.quiet)?;

        let (endpoints, settings) = self.load_cfg()?.split();
        debug!("endpoints: {:?}", endpoints);
        let transport = HttpTransport::new(settings.timeout())?;
        let client = SoapClient::new(transport, endpoints, settings);

        let login = Self::read_field(&self.login, "login")?;
        let password = Self::read_field(&self.password, "password")?;

        if self.dry {
            let request = client.prepare(&Credentials::from_form(&login, &password)).await;
            println!("POST {}", request.url);
            for (name, value) in SoapRequest::HEADERS {
                println!("{}: {}", name, value);
            }
            println!();
            println!("{}", request.envelope);
            return Ok(())
        }

        let result = if self.html {
            let (result, view) = Self::submit_with(HtmlView::default(), client, &login, &password).await;
            println!("{}", view.snapshot().message);
            result
        } else {
            Self::submit_with(TerminalView::new(self.quiet), client, &login, &password).await.0
        };

        match result? {
            LoginOutcome::Authenticated { .. } => Ok(()),
            LoginOutcome::Rejected { .. } => Err(RuntimeError::LoginRejected),
        }
    }
}

fn home_dir() -> Option<PathBuf> {
    home::home_dir().or_else(|| users::get_current_username().map(|u| PathBuf::from("/home").join(u)))
}
