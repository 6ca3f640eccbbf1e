use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::Response,
};

use enigma_core::{DomainException, ErrorKind};

use crate::app::errors::{ExceptionTranslator, Raised};
use crate::context::RequestContext;

/// Arms a translator per request and converts whatever failure the inner
/// stack raised into an error envelope. Only the panic catcher sits outside it.
///
/// A bare 405 produced by the router (no raised exception) is brought into
/// the same contract.
pub async fn translate_exceptions(mut req: Request, next: Next) -> Response {
    let context = RequestContext::new(req.method().clone(), req.uri().path());
    req.extensions_mut().insert(context.clone());

    let mut response = next.run(req).await;

    if let Some(Raised(exception)) = response.extensions_mut().remove::<Raised>() {
        return ExceptionTranslator::arm(context).translate(exception);
    }

    if response.status() == StatusCode::METHOD_NOT_ALLOWED {
        let message = format!(
            "Method {} is not allowed on {}.",
            context.method(),
            context.path()
        );
        return ExceptionTranslator::arm(context)
            .translate(DomainException::routing(ErrorKind::MethodNotAllowed, message));
    }

    response
}
