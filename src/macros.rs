/// Return the request with HTTP 400
#[macro_export]
macro_rules! bad_request {
    ($message:expr) => {
        return Err(crate::errors::ServiceError::BadRequest(
            $message.to_string(),
        ))
    };
}

/// Return the request with HTTP 404
#[macro_export]
macro_rules! not_found {
    ($message:expr) => {
        return Err(crate::errors::ServiceError::NotFound($message.to_string()))
    };
}

/// Answer the request with HTTP 201, a Location header pointing at the new
/// resource and the object as response body
#[macro_export]
macro_rules! http_created_json {
    ($request:expr, $id:expr, $object:expr) => {
        return Ok(actix_web::web::HttpResponse::Created()
            .header(
                actix_web::http::header::LOCATION,
                format!("{}/{}", $request.path().trim_end_matches('/'), $id),
            )
            .json($object));
    };
}

/// Answer the request with HTTP 200 and the object as response body
#[macro_export]
macro_rules! http_ok_json {
    ($object:expr) => {
        return Ok(actix_web::web::HttpResponse::Ok().json($object));
    };
}

/// Answer the request with HTTP 200 and the list as response body,
/// or HTTP 204 when the list is empty
#[macro_export]
macro_rules! http_list_json {
    ($list:expr) => {
        if $list.is_empty() {
            return Ok(actix_web::web::HttpResponse::NoContent().finish());
        }
        return Ok(actix_web::web::HttpResponse::Ok().json($list));
    };
}
