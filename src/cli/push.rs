use anyhow::Result;

pub async fn run(url: &str, payload: String) -> Result<()> {
    let resp = reqwest::Client::new()
        .post(format!("{}/api/push", url.trim_end_matches('/')))
        .body(payload)
        .send()
        .await?
        .error_for_status()?;

    println!("{}", resp.text().await?);

    Ok(())
}
