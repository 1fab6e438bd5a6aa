use async_trait::async_trait;

/// Delivers verification codes to users
#[async_trait]
pub trait VerificationSender: Send + Sync {
    async fn send(&self, email: &str, name: &str, code: &str) -> anyhow::Result<()>;
}

/// Simulated delivery: the code only goes to the log
pub struct TracingSender;

#[async_trait]
impl VerificationSender for TracingSender {
    async fn send(&self, email: &str, name: &str, code: &str) -> anyhow::Result<()> {
        tracing::info!(
            "Simulated e-mail to {} <{}>: verification code {}",
            name,
            email,
            code
        );
        Ok(())
    }
}
