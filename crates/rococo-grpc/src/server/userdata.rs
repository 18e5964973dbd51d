//! Userdata service. Users are addressed by username; rows are provisioned
//! out of band, so updates never create.

use std::sync::Arc;

use tonic::{Request, Response, Status};

use rococo_core::ports::UserStore;
use rococo_core::types::User;
use rococo_core::{id, service};

use crate::proto::rococo::userdata::rococo_userdata_service_server::RococoUserdataService;
use crate::proto::rococo::userdata::{UpdateUserRequest, UserRequest, UserResponse};
use crate::status::to_status;

pub struct UserdataGrpcService {
    store: Arc<dyn UserStore>,
}

impl UserdataGrpcService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }
}

fn to_message(user: User) -> UserResponse {
    UserResponse {
        id: id::encode(user.id),
        username: user.username,
        firstname: user.firstname,
        lastname: user.lastname,
        avatar: user.avatar,
    }
}

#[tonic::async_trait]
impl RococoUserdataService for UserdataGrpcService {
    async fn get_user(
        &self,
        request: Request<UserRequest>,
    ) -> Result<Response<UserResponse>, Status> {
        let req = request.into_inner();
        let found = self
            .store
            .find_by_username(&req.username)
            .await
            .map_err(to_status)?;
        let user = service::require(found, "username", &req.username).map_err(to_status)?;
        Ok(Response::new(to_message(user)))
    }

    async fn update_user(
        &self,
        request: Request<UpdateUserRequest>,
    ) -> Result<Response<UserResponse>, Status> {
        let req = request.into_inner();
        let found = self
            .store
            .find_by_username(&req.username)
            .await
            .map_err(to_status)?;
        let mut user = service::require(found, "username", &req.username).map_err(to_status)?;

        user.firstname = req.firstname;
        user.lastname = req.lastname;
        user.avatar = req.avatar;
        self.store.update(&user).await.map_err(to_status)?;

        Ok(Response::new(to_message(user)))
    }
}
