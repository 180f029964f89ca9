use super::endpoint::{DELETE_SERVER, GET_SERVER, LIST_SERVERS};
use super::{CloudControlClient, CloudControlError, PagedStream};
use crate::domain::{Page, PaginationOptions, Response, Server, ServerId};
use crate::transport::encode_id_json;

impl CloudControlClient {
    pub async fn list_servers(
        &self,
        options: &PaginationOptions,
    ) -> Result<Page<Server>, CloudControlError> {
        self.list_page(&LIST_SERVERS, &[], options).await
    }

    pub fn stream_servers(&self) -> PagedStream<Server> {
        self.stream_records(&LIST_SERVERS, Vec::new())
    }

    pub async fn get_server(&self, id: &ServerId) -> Result<Option<Server>, CloudControlError> {
        self.fetch_record(&GET_SERVER, id.as_str()).await
    }

    pub async fn delete_server(&self, id: &ServerId) -> Result<Response, CloudControlError> {
        self.submit(&DELETE_SERVER, encode_id_json(id.as_str()))
            .await
    }
}
