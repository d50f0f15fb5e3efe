use walletauth::prelude::*;

// ---------------------------------------------------------------------------
// Simulated SDK session
// ---------------------------------------------------------------------------

/// One thing the identity SDK might report.
enum Outcome {
    Login(serde_json::Value),
    Signup(serde_json::Value),
    Error(serde_json::Value),
    Logout,
}

/// A typical session: wallet login, dropped relay, passkey signup, sign-out.
fn script() -> Vec<Outcome> {
    vec![
        Outcome::Login(serde_json::json!({
            "authMethod": "metamask_direct",
            "username": "0x52908400098527886E0F7030069857D2E4169EE7",
            "userPub": "kF2n8Qp3.pub",
        })),
        Outcome::Error(serde_json::json!({ "message": "relay disconnected" })),
        Outcome::Signup(serde_json::json!({
            "authMethod": "webauthn",
            "username": "alice",
            "userPub": "Zx81Lm0q.pub",
        })),
        Outcome::Logout,
    ]
}

fn emit(handle: &SdkHandle, outcome: &Outcome) -> Result<(), WalletAuthError> {
    match outcome {
        Outcome::Login(data) => handle.login_success(data.to_string())?,
        Outcome::Signup(data) => handle.signup_success(data.to_string())?,
        Outcome::Error(data) => handle.error(data.to_string())?,
        Outcome::Logout => handle.logout()?,
    }
    Ok(())
}

fn label(view: &AuthView, host_wallet: Option<&str>) -> String {
    view.display_address(host_wallet)
        .unwrap_or_else(|| "(none)".to_string())
}

// ---------------------------------------------------------------------------
// Bootstrap
// ---------------------------------------------------------------------------

/// Usage: `connect [config.json] [host-wallet-address]`
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    walletauth::init_tracing();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => SdkConfig::load(path)?,
        None => SdkConfig::default(),
    };
    let host_wallet = args.next();

    let (sdk, handle) = ChannelSdk::new();
    let driver = SessionDriverBuilder::new().config(config).build(sdk);
    let mut view = driver.subscribe();
    let task = tokio::spawn(driver.run());

    handle.mark_initialized()?;
    println!("connected address: {}", label(&view, host_wallet.as_deref()));

    for outcome in script() {
        emit(&handle, &outcome)?;
        let state = view.changed().await?;
        println!(
            "{:<10} connected address: {}",
            state.status().to_string(),
            label(&view, host_wallet.as_deref())
        );
    }

    drop(handle);
    task.await??;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_script_ends_logged_out_after_every_transition() {
        let (sdk, handle) = ChannelSdk::new();
        let driver = SessionDriverBuilder::new().build(sdk);
        let mut view = driver.subscribe();
        let task = tokio::spawn(driver.run());
        handle.mark_initialized().unwrap();

        let mut seen = Vec::new();
        for outcome in script() {
            emit(&handle, &outcome).unwrap();
            seen.push(view.changed().await.unwrap().status());
        }
        drop(handle);
        task.await.unwrap().unwrap();

        assert_eq!(
            seen,
            vec![
                AuthStatus::LoggedIn,
                AuthStatus::Errored,
                AuthStatus::LoggedIn,
                AuthStatus::LoggedOut,
            ]
        );
    }

    #[tokio::test]
    async fn test_label_uses_host_wallet_when_signed_out() {
        let (sdk, _handle) = ChannelSdk::new();
        let driver = SessionDriverBuilder::new().build(sdk);
        let view = driver.subscribe();

        assert_eq!(label(&view, Some("0xHOST")), "0xHOST");
        assert_eq!(label(&view, None), "(none)");
    }
}
