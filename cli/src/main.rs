//! Command-line probe for the Asynqmon login endpoint.
//!
//! Runs the same `LoginFlow` the browser runs, with a token supplied on the
//! command line instead of the Google popup, and prints the toast text and the
//! redirect target the browser would have followed.


use std::time::Duration;

use async_trait::async_trait;
use clap::{Args, Parser, Subcommand};
use login::{
    AuthBackend, Identity, IdentityProvider, LoginConfig, LoginFlow, LoginOutcome, LoginRequest, Navigator, Notice,
    NoticeLevel, Notifier, ProviderError, Scheduler, TransportError,
};
use tokio::sync::mpsc;
use tokio::task::{JoinHandle, LocalSet};

/// Extra wait past the redirect delay before giving up on the redirect.
const REDIRECT_GRACE: Duration = Duration::from_secs(1);

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("ping failed: HTTP {0}")]
    PingFailed(u16),
    #[error("login did not succeed: {0:?}")]
    LoginFailed(LoginOutcome),
    #[error("timed out waiting for redirect")]
    RedirectTimeout,
}

#[derive(Parser, Debug)]
#[command(name = "asynqmon-login-cli", about = "Asynqmon login probe")]
struct Cli {
    #[arg(long, env = "ASYNQMON_API_BASE_URL", default_value = "http://localhost:9090")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check the server heartbeat.
    Ping,
    /// Exchange an identity token for a session.
    Login(LoginArgs),
}

#[derive(Args, Debug)]
struct LoginArgs {
    /// Firebase identity token. Without one the attempt fails like a closed popup.
    #[arg(long, env = "ASYNQMON_ID_TOKEN")]
    id_token: Option<String>,

    #[arg(long, env = "ASYNQMON_EMAIL", default_value = "")]
    email: String,

    /// Page origin used for the redirect target; defaults to the base URL.
    #[arg(long)]
    origin: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    // The flow's futures and timers are !Send; keep them on one thread.
    LocalSet::new()
        .run_until(async move {
            match cli.command {
                Command::Ping => run_ping(&cli.base_url).await,
                Command::Login(args) => {
                    let target = run_login(&cli.base_url, args).await?;
                    println!("redirect: {target}");
                    Ok(())
                }
            }
        })
        .await
}

async fn run_ping(base_url: &str) -> Result<(), CliError> {
    let url = format!("{}/ping", base_url.trim_end_matches('/'));
    let response = reqwest::Client::new().get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::PingFailed(status.as_u16()));
    }
    println!("ok");
    Ok(())
}

/// Run one attempt and return the URL the flow navigated to.
async fn run_login(base_url: &str, args: LoginArgs) -> Result<String, CliError> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let config = LoginConfig::new(base_url);
    let wait = config.redirect_delay + REDIRECT_GRACE;
    let navigator = ChannelNavigator { origin: args.origin.unwrap_or_else(|| base_url.to_owned()), visits: tx };

    let flow = LoginFlow::new(
        config,
        StaticIdentity { id_token: args.id_token, email: args.email },
        ReqwestBackend { client: reqwest::Client::new() },
        TerminalNotifier,
        navigator,
        TokioScheduler,
    );

    let outcome = flow.attempt_login().await;
    if !outcome.is_success() {
        return Err(CliError::LoginFailed(outcome));
    }

    let target = tokio::time::timeout(wait, rx.recv())
        .await
        .map_err(|_| CliError::RedirectTimeout)?
        .ok_or(CliError::RedirectTimeout)?;
    Ok(target)
}

// =============================================================================
// PORTS
// =============================================================================

/// Identity supplied up front instead of through a popup.
struct StaticIdentity {
    id_token: Option<String>,
    email: String,
}

#[async_trait(?Send)]
impl IdentityProvider for StaticIdentity {
    async fn sign_in(&self) -> Result<Identity, ProviderError> {
        let id_token = self.id_token.clone().filter(|t| !t.trim().is_empty()).ok_or_else(|| {
            ProviderError::Unavailable("no id token; pass --id-token or set ASYNQMON_ID_TOKEN".to_owned())
        })?;
        Ok(Identity { id_token, email: self.email.clone() })
    }
}

struct ReqwestBackend {
    client: reqwest::Client,
}

#[async_trait(?Send)]
impl AuthBackend for ReqwestBackend {
    async fn login(&self, endpoint: &str, request: &LoginRequest) -> Result<u16, TransportError> {
        let response = self
            .client
            .post(endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| TransportError::new(format!("POST {endpoint} failed: {e}")))?;
        Ok(response.status().as_u16())
    }
}

struct TerminalNotifier;

fn render_notice(notice: &Notice) -> String {
    let tag = match notice.level {
        NoticeLevel::Success => "ok",
        NoticeLevel::Error => "error",
    };
    format!("[{tag}] {}", notice.message)
}

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => println!("{}", render_notice(&notice)),
            NoticeLevel::Error => eprintln!("{}", render_notice(&notice)),
        }
    }
}

/// Records the redirect instead of following it.
#[derive(Clone)]
struct ChannelNavigator {
    origin: String,
    visits: mpsc::UnboundedSender<String>,
}

impl Navigator for ChannelNavigator {
    fn origin(&self) -> String {
        self.origin.clone()
    }

    fn replace(&self, url: &str) {
        if self.visits.send(url.to_owned()).is_err() {
            eprintln!("redirect to {url} dropped: receiver gone");
        }
    }
}

/// `spawn_local` + `sleep`; must run inside a `LocalSet`.
struct TokioScheduler;

/// Aborts the sleeping task when dropped.
struct AbortOnDrop(JoinHandle<()>);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}

impl Scheduler for TokioScheduler {
    type Handle = AbortOnDrop;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle {
        AbortOnDrop(tokio::task::spawn_local(async move {
            tokio::time::sleep(delay).await;
            task();
        }))
    }
}
