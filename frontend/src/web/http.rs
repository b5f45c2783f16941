//! 浏览器 HTTP 客户端
//!
//! 基于 `gloo-net` 的 fetch 封装，实现核心库的 `HttpClient`。
//! multipart 请求体由 `FormData` 承载，文件部分直接使用 `web_sys::File`。

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use store_admin::error::{AdminError, AdminResult};
use store_admin::request::{FormField, HttpClient, HttpMethod, HttpRequest, HttpResponse, RequestBody};
use web_sys::{File, FormData, RequestCredentials};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchClient;

impl FetchClient {
    fn builder(url: &str, method: HttpMethod) -> RequestBuilder {
        match method {
            HttpMethod::Get => Request::get(url),
            HttpMethod::Post => Request::post(url),
            HttpMethod::Put => Request::put(url),
            HttpMethod::Delete => Request::delete(url),
        }
    }

    fn form_data(fields: Vec<FormField<File>>) -> AdminResult<FormData> {
        let form = FormData::new()
            .map_err(|e| AdminError::network(format!("创建 FormData 失败: {:?}", e)))?;
        for field in fields {
            let appended = match field {
                FormField::Text { name, value } => form.append_with_str(&name, &value),
                FormField::File { name, file } => form.append_with_blob(&name, &file),
            };
            appended.map_err(|e| AdminError::network(format!("写入 FormData 失败: {:?}", e)))?;
        }
        Ok(form)
    }
}

#[async_trait(?Send)]
impl HttpClient for FetchClient {
    type File = File;

    async fn send(&self, req: HttpRequest<File>) -> AdminResult<HttpResponse> {
        let mut builder = Self::builder(&req.url, req.method);
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }
        if req.with_credentials {
            builder = builder.credentials(RequestCredentials::Include);
        }

        let request = match req.body {
            RequestBody::Empty => builder.build(),
            RequestBody::Json(body) => builder.body(body),
            RequestBody::Multipart(fields) => builder.body(Self::form_data(fields)?),
        }
        .map_err(|e| AdminError::network(format!("请求构建失败: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| AdminError::network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AdminError::network(format!("读取响应失败: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}
