//! Stateless HTTP client for the portal backend.
//! Every operation issues one request and resolves to a uniform outcome:
//! decoded data on success, or an `AppError` carrying a user-facing message.
//! Connection failures and undecodable bodies are caught and converted; a
//! non-2xx response becomes an error keyed by status, carrying the server's
//! `message` field when one is present. No retries, no timeouts, no
//! cancellation; navigating away simply abandons an in-flight call.

use reqwest::{Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{AppError, AppResult};

use super::types::{Categoria, LoginRequest, Pedido, Producto, RegisterRequest, Usuario};
use crate::session::Rol;

const MSG_CONEXION: &str = "Error al conectar";

#[derive(Debug)]
pub struct ApiClient {
    base: Url,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base: &str) -> AppResult<Self> {
        let base = Url::parse(base)
            .map_err(|e| AppError::validation("api_url".to_string(), format!("URL base inválida: {}", e)))?;
        Ok(Self { base, http: reqwest::Client::new() })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn url(&self, path: &str) -> AppResult<Url> {
        self.base
            .join(path)
            .map_err(|e| AppError::internal("bad_path".to_string(), e.to_string()))
    }

    /// Translate a response into the uniform outcome. `fallo` is the fixed
    /// user-facing message used when the server did not provide one.
    async fn decode<T: DeserializeOwned>(resp: Response, fallo: &str) -> AppResult<T> {
        let status = resp.status();
        if !status.is_success() {
            let msg = resp
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
                .unwrap_or_else(|| fallo.to_string());
            return Err(AppError::from_status(status.as_u16(), msg));
        }
        resp.json::<T>()
            .await
            .map_err(|e| AppError::network("decode_error".to_string(), format!("Respuesta inválida del servidor: {}", e)))
    }

    fn transport(e: reqwest::Error) -> AppError {
        debug!(target: "portal", "request failed: {}", e);
        AppError::network("network_error", MSG_CONEXION)
    }

    // ---- auth ----

    /// `POST /api/usuarios/login`. Bad credentials surface as an auth error
    /// with the fixed message the login screen shows.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<Usuario> {
        let url = self.url("/api/usuarios/login")?;
        let resp = self
            .http
            .post(url)
            .json(&LoginRequest { email, password })
            .send()
            .await
            .map_err(Self::transport)?;
        let usuario: Usuario = Self::decode(resp, "Credenciales inválidas").await?;
        debug!(target: "portal", "login ok for {} rol={}", usuario.email, usuario.rol);
        Ok(usuario)
    }

    /// `POST /api/usuarios/register`. New accounts always register as
    /// `USUARIO`; admin accounts are provisioned server-side.
    pub async fn register(
        &self,
        nombre: &str,
        apellido: &str,
        email: &str,
        password: &str,
    ) -> AppResult<Usuario> {
        let url = self.url("/api/usuarios/register")?;
        let body = RegisterRequest { nombre, apellido, email, password, rol: Rol::Usuario };
        let resp = self.http.post(url).json(&body).send().await.map_err(Self::transport)?;
        let usuario: Usuario = Self::decode(resp, "Error al registrar").await?;
        debug!(target: "portal", "register ok for {}", usuario.email);
        Ok(usuario)
    }

    // ---- generic CRUD over /api/{recurso}[/{id}] ----

    async fn list<T: DeserializeOwned>(&self, recurso: &str, fallo: &str) -> AppResult<Vec<T>> {
        let url = self.url(&format!("/api/{}", recurso))?;
        let resp = self.http.get(url).send().await.map_err(Self::transport)?;
        Self::decode(resp, fallo).await
    }

    async fn get_one<T: DeserializeOwned>(&self, recurso: &str, id: i64, fallo: &str) -> AppResult<T> {
        let url = self.url(&format!("/api/{}/{}", recurso, id))?;
        let resp = self.http.get(url).send().await.map_err(Self::transport)?;
        Self::decode(resp, fallo).await
    }

    async fn create<B: Serialize, T: DeserializeOwned>(
        &self,
        recurso: &str,
        body: &B,
        fallo: &str,
    ) -> AppResult<T> {
        let url = self.url(&format!("/api/{}", recurso))?;
        let resp = self.http.post(url).json(body).send().await.map_err(Self::transport)?;
        Self::decode(resp, fallo).await
    }

    async fn update<B: Serialize, T: DeserializeOwned>(
        &self,
        recurso: &str,
        id: i64,
        body: &B,
        fallo: &str,
    ) -> AppResult<T> {
        let url = self.url(&format!("/api/{}/{}", recurso, id))?;
        let resp = self.http.put(url).json(body).send().await.map_err(Self::transport)?;
        Self::decode(resp, fallo).await
    }

    async fn remove(&self, recurso: &str, id: i64, fallo: &str) -> AppResult<()> {
        let url = self.url(&format!("/api/{}/{}", recurso, id))?;
        let resp = self.http.delete(url).send().await.map_err(Self::transport)?;
        let status = resp.status();
        if !status.is_success() {
            let msg = resp
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
                .unwrap_or_else(|| fallo.to_string());
            return Err(AppError::from_status(status.as_u16(), msg));
        }
        Ok(())
    }

    // ---- productos ----

    pub async fn productos(&self) -> AppResult<Vec<Producto>> {
        self.list("productos", "Error al obtener productos").await
    }

    pub async fn producto(&self, id: i64) -> AppResult<Producto> {
        self.get_one("productos", id, "Error al obtener el producto").await
    }

    pub async fn crear_producto(&self, producto: &Producto) -> AppResult<Producto> {
        self.create("productos", producto, "Error al crear el producto").await
    }

    pub async fn actualizar_producto(&self, id: i64, producto: &Producto) -> AppResult<Producto> {
        self.update("productos", id, producto, "Error al actualizar el producto").await
    }

    pub async fn eliminar_producto(&self, id: i64) -> AppResult<()> {
        self.remove("productos", id, "Error al eliminar el producto").await
    }

    // ---- categorias ----

    pub async fn categorias(&self) -> AppResult<Vec<Categoria>> {
        self.list("categorias", "Error al obtener categorías").await
    }

    pub async fn crear_categoria(&self, categoria: &Categoria) -> AppResult<Categoria> {
        self.create("categorias", categoria, "Error al crear la categoría").await
    }

    pub async fn actualizar_categoria(&self, id: i64, categoria: &Categoria) -> AppResult<Categoria> {
        self.update("categorias", id, categoria, "Error al actualizar la categoría").await
    }

    pub async fn eliminar_categoria(&self, id: i64) -> AppResult<()> {
        self.remove("categorias", id, "Error al eliminar la categoría").await
    }

    // ---- pedidos ----

    pub async fn pedidos(&self) -> AppResult<Vec<Pedido>> {
        self.list("pedidos", "Error al obtener pedidos").await
    }

    pub async fn crear_pedido(&self, pedido: &Pedido) -> AppResult<Pedido> {
        self.create("pedidos", pedido, "Error al crear pedido").await
    }

    pub async fn eliminar_pedido(&self, id: i64) -> AppResult<()> {
        self.remove("pedidos", id, "Error al eliminar el pedido").await
    }

    // ---- usuarios ----

    pub async fn usuarios(&self) -> AppResult<Vec<Usuario>> {
        self.list("usuarios", "Error al obtener usuarios").await
    }

    pub async fn usuario(&self, id: i64) -> AppResult<Usuario> {
        self.get_one("usuarios", id, "Error al obtener el usuario").await
    }

    pub async fn actualizar_usuario(&self, id: i64, usuario: &Usuario) -> AppResult<Usuario> {
        self.update("usuarios", id, usuario, "Error al actualizar el usuario").await
    }

    pub async fn eliminar_usuario(&self, id: i64) -> AppResult<()> {
        self.remove("usuarios", id, "Error al eliminar el usuario").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_must_parse() {
        assert!(ApiClient::new("http://localhost:8080").is_ok());
        let err = ApiClient::new("no es una url").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn paths_join_against_base() {
        let client = ApiClient::new("http://localhost:8080").unwrap();
        let url = client.url("/api/productos/7").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/productos/7");
    }

    #[test]
    fn base_with_path_is_replaced_by_absolute_api_path() {
        // The API lives at the server root; a base with a stray path segment
        // still resolves endpoint URLs at the root.
        let client = ApiClient::new("http://localhost:8080/ignored").unwrap();
        let url = client.url("/api/pedidos").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/pedidos");
    }
}
