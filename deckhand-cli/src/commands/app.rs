use deckhand_common::{DeleteRequest, DeploymentRequest, Error, Result, StatusResponse};

use super::Console;

pub async fn deploy(
    console: &Console,
    api_image: String,
    client_image: String,
    namespace: String,
) -> Result<()> {
    let request = DeploymentRequest {
        api_image,
        client_image,
        namespace,
    };

    console.deploy(request).await.map(|_| ())
}

pub async fn delete(console: &Console, namespace: String) -> Result<()> {
    console.destroy(DeleteRequest { namespace }).await.map(|_| ())
}

pub async fn status(console: &Console, namespace: &str) -> Result<()> {
    match console.get_status(namespace).await? {
        StatusResponse::Pods(_) => Ok(()),
        // reported inside a 2xx body, already printed as the status output
        StatusResponse::Error(body) => Err(Error::Backend {
            status: 200,
            message: body.error,
        }),
    }
}
