use std::io::Write;

use clap::{Parser, Subcommand};

use crate::api::ObjectStorageApi;
use crate::api::types::ListOptions;
use crate::error::Result;
use crate::object_storage::{ObjectStorageClient, parse_cluster_id, require_id};
use crate::object_storage::constants::{
    DEFAULT_PER_PAGE, DEFAULT_TIER_ID, DELETED_MESSAGE, LABEL_SET_MESSAGE, MAX_PER_PAGE,
};
use crate::printer::{
    ClustersPrinter, KeysPrinter, MessagePrinter, ObjectStoragePrinter, ObjectStoragesPrinter,
    OutputFormat, Printer, TiersPrinter,
};

#[derive(Parser, Debug)]
#[command(
    name = "vcloud",
    version,
    about = "Command-line tool for managing cloud resources"
)]
pub struct Args {
    /// Output format
    #[arg(
        short,
        long,
        global = true,
        value_enum,
        env = "VCLOUD_OUTPUT",
        default_value_t = OutputFormat::Text
    )]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Commands to manage object storage
    #[command(subcommand, name = "object-storage", visible_alias = "objstore")]
    ObjectStorage(ObjectStorageCommand),
}

#[derive(Subcommand, Debug)]
pub enum ObjectStorageCommand {
    /// Retrieve all active object storages
    List(PagingArgs),

    /// Retrieve a given object storage
    Get(IdArgs),

    /// Create a new object storage
    Create(CreateArgs),

    /// Change the label for object storage
    Label(LabelArgs),

    /// Delete an object storage
    #[command(visible_alias = "destroy")]
    Delete(IdArgs),

    /// Regenerate the S3 API keys for an object storage
    RegenerateKeys(IdArgs),

    /// Retrieve a list of all available object storage clusters
    ListClusters(PagingArgs),

    /// Retrieve a list of all available object storage tiers on a specific cluster
    ListClusterTiers(ClusterArgs),

    /// Retrieve a list of all available object storage tiers
    ListTiers(PagingArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct PagingArgs {
    /// (optional) Cursor for paging.
    #[arg(short, long)]
    pub cursor: Option<String>,

    /// (optional) Number of items requested per page. Default is 100 and Max is 500.
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_PER_PAGE,
        value_parser = clap::value_parser!(u32).range(1..=MAX_PER_PAGE as i64)
    )]
    pub per_page: u32,
}

impl PagingArgs {
    pub fn options(&self) -> ListOptions {
        ListOptions {
            per_page: Some(self.per_page),
            cursor: self.cursor.clone(),
        }
    }
}

#[derive(clap::Args, Debug, Clone)]
pub struct IdArgs {
    /// Object Storage ID
    #[arg(value_name = "OBJECT_STORAGE_ID")]
    pub id: Option<String>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ClusterArgs {
    /// Cluster ID
    #[arg(value_name = "CLUSTER_ID")]
    pub cluster_id: Option<String>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct CreateArgs {
    /// label you want your object storage to have
    #[arg(short, long)]
    pub label: Option<String>,

    /// ID of the cluster in which to create the object storage
    #[arg(short = 'i', long)]
    pub cluster_id: i64,

    /// Tier ID used to create the object storage tiers
    #[arg(short, long, default_value_t = DEFAULT_TIER_ID)]
    pub tier_id: i64,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LabelArgs {
    /// Object Storage ID
    #[arg(value_name = "OBJECT_STORAGE_ID")]
    pub id: Option<String>,

    /// label you want your object storage to have
    #[arg(short, long)]
    pub label: String,
}

/// Check positional arguments that can be rejected without any configuration.
///
/// Runs before the API key is loaded, so a missing ID is reported as such
/// even when no credentials are set.
pub fn validate(args: &Args) -> Result<()> {
    let Command::ObjectStorage(cmd) = &args.command;
    match cmd {
        ObjectStorageCommand::Get(args)
        | ObjectStorageCommand::Delete(args)
        | ObjectStorageCommand::RegenerateKeys(args) => {
            require_id(args.id.as_deref())?;
        }
        ObjectStorageCommand::Label(args) => {
            require_id(args.id.as_deref())?;
        }
        ObjectStorageCommand::ListClusterTiers(args) => {
            parse_cluster_id(args.cluster_id.as_deref())?;
        }
        ObjectStorageCommand::List(_)
        | ObjectStorageCommand::Create(_)
        | ObjectStorageCommand::ListClusters(_)
        | ObjectStorageCommand::ListTiers(_) => {}
    }
    Ok(())
}

/// Run the parsed command against `api`, printing to stdout.
pub async fn run<A: ObjectStorageApi>(args: Args, api: A) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_writer(args, api, &mut out).await
}

pub async fn run_with_writer<A, W>(args: Args, api: A, out: &mut W) -> Result<()>
where
    A: ObjectStorageApi,
    W: Write,
{
    let printer = Printer::new(args.output);
    match args.command {
        Command::ObjectStorage(cmd) => {
            run_object_storage(cmd, ObjectStorageClient::new(api), printer, out).await
        }
    }
}

async fn run_object_storage<A, W>(
    cmd: ObjectStorageCommand,
    client: ObjectStorageClient<A>,
    printer: Printer,
    out: &mut W,
) -> Result<()>
where
    A: ObjectStorageApi,
    W: Write,
{
    match cmd {
        ObjectStorageCommand::List(paging) => {
            let (object_storages, meta) = client.list(&paging.options()).await?;
            printer.display(
                out,
                &ObjectStoragesPrinter {
                    object_storages,
                    meta,
                },
            )
        }
        ObjectStorageCommand::Get(args) => {
            let object_storage = client.get(args.id.as_deref()).await?;
            printer.display(out, &ObjectStoragePrinter { object_storage })
        }
        ObjectStorageCommand::Create(args) => {
            let object_storage = client
                .create(args.cluster_id, args.tier_id, args.label.as_deref())
                .await?;
            printer.display(out, &ObjectStoragePrinter { object_storage })
        }
        ObjectStorageCommand::Label(args) => {
            client
                .update_label(args.id.as_deref(), &args.label)
                .await?;
            printer.display(out, &MessagePrinter::new(LABEL_SET_MESSAGE))
        }
        ObjectStorageCommand::Delete(args) => {
            client.delete(args.id.as_deref()).await?;
            printer.display(out, &MessagePrinter::new(DELETED_MESSAGE))
        }
        ObjectStorageCommand::RegenerateKeys(args) => {
            let s3_credentials = client.regenerate_keys(args.id.as_deref()).await?;
            printer.display(out, &KeysPrinter { s3_credentials })
        }
        ObjectStorageCommand::ListClusters(paging) => {
            let (clusters, meta) = client.list_clusters(&paging.options()).await?;
            printer.display(out, &ClustersPrinter { clusters, meta })
        }
        ObjectStorageCommand::ListClusterTiers(args) => {
            let tiers = client
                .list_cluster_tiers(args.cluster_id.as_deref())
                .await?;
            printer.display(out, &TiersPrinter { tiers })
        }
        ObjectStorageCommand::ListTiers(paging) => {
            let tiers = client.list_tiers(&paging.options()).await?;
            printer.display(out, &TiersPrinter { tiers })
        }
    }
}
