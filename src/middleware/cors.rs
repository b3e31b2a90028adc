use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::{
        header::{self, HeaderValue},
        Method,
    },
    Error, HttpResponse,
};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;

/// Cross-origin policy for the single browser frontend.
///
/// Every response carries the allow-origin/methods/headers trio, and any
/// `OPTIONS` preflight is answered `200` with an empty body before routing.
/// An origin that is not a valid header value is left out entirely.
pub struct CorsHeaders {
    origin: Rc<Option<HeaderValue>>,
}

impl CorsHeaders {
    pub fn new(origin: &str) -> Self {
        let origin = match HeaderValue::from_str(origin) {
            Ok(value) if !origin.trim().is_empty() => Some(value),
            _ => {
                log::warn!("⚠️  Invalid CORS origin {:?}, omitting Access-Control-Allow-Origin", origin);
                None
            }
        };
        Self {
            origin: Rc::new(origin),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for CorsHeaders
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = CorsHeadersMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CorsHeadersMiddleware {
            service,
            origin: Rc::clone(&self.origin),
        }))
    }
}

pub struct CorsHeadersMiddleware<S> {
    service: S,
    origin: Rc<Option<HeaderValue>>,
}

impl<S, B> Service<ServiceRequest> for CorsHeadersMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let origin = Rc::clone(&self.origin);

        if req.method() == Method::OPTIONS {
            let mut res = req
                .into_response(HttpResponse::Ok().finish())
                .map_into_right_body();
            apply_headers(&mut res, &origin);
            return Box::pin(async move { Ok(res) });
        }

        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?.map_into_left_body();
            apply_headers(&mut res, &origin);
            Ok(res)
        })
    }
}

fn apply_headers<B>(res: &mut ServiceResponse<B>, origin: &Option<HeaderValue>) {
    let headers = res.headers_mut();

    if let Some(origin) = origin {
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone());
    }
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET,POST,OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
}
