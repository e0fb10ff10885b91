//! Command dispatch: bridges CLI args -> API client calls -> output.

pub mod registration;
pub mod resource;
pub mod subscription;
pub mod util;
pub mod version;

use orion_api::{OrionClient, Registration, Scope, Subscription};

use crate::cli::{
    Command, CreateResource, DeleteResource, DescribeResource, GetResource, GlobalOpts,
};
use crate::error::CliError;

/// Dispatch a broker-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    client: &OrionClient,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let scope = Scope::new(
        global.fiware_service.clone(),
        global.fiware_servicepath.clone(),
    );

    match cmd {
        Command::Get(args) => match args.resource {
            GetResource::Subscriptions { ids } => {
                resource::get::<Subscription>(client, &ids, &scope, global).await
            }
            GetResource::Registrations { ids } => {
                resource::get::<Registration>(client, &ids, &scope, global).await
            }
            GetResource::Version => version::handle(client, global).await,
        },

        Command::Describe(args) => match args.resource {
            DescribeResource::Subscriptions { ids } => {
                resource::describe::<Subscription>(client, &ids, &scope, global).await
            }
            DescribeResource::Registrations { ids } => {
                resource::describe::<Registration>(client, &ids, &scope, global).await
            }
        },

        Command::Create(args) => match args.resource {
            CreateResource::Subscriptions { file } => {
                resource::create::<Subscription>(client, &file, &scope, global).await
            }
            CreateResource::Registrations { file } => {
                resource::create::<Registration>(client, &file, &scope, global).await
            }
        },

        Command::Delete(args) => match args.resource {
            DeleteResource::Subscriptions { ids } => {
                resource::delete::<Subscription>(client, &ids, &scope, global).await
            }
            DeleteResource::Registrations { ids } => {
                resource::delete::<Registration>(client, &ids, &scope, global).await
            }
        },

        // Completions are handled before a client is built.
        Command::Completions(_) => unreachable!(),
    }
}
