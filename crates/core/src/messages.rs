//! Default messages substituted by [`DetailedResponse`](crate::DetailedResponse)
//! constructors when the caller passes an empty message.

pub const MSG_OK: &str = "Operación exitosa";
pub const MSG_PAGINATED: &str = "Datos obtenidos exitosamente";
pub const MSG_NOT_FOUND: &str = "Recurso no encontrado";
pub const MSG_UNAUTHORIZED: &str = "No autorizado";
pub const MSG_SERVER_ERROR: &str = "Error interno del servidor";
pub const MSG_UNEXPECTED_ERROR: &str = "Se produjo un error inesperado";

/// Return `message`, or `default` when `message` is empty.
///
/// Only the empty string triggers substitution; whitespace is kept as given.
pub fn or_default(message: impl Into<String>, default: &str) -> String {
    let message = message.into();
    if message.is_empty() {
        default.to_string()
    } else {
        message
    }
}
