use clap::{Args, Subcommand, ValueEnum};
use salp_core::FieldId;
use salp_core::schema::SchemaKind;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Fill in the input form interactively and submit it.
    Form(FormArgs),
    /// Request one prediction; unspecified fields keep their defaults.
    Predict(PredictArgs),
    /// List the input fields with their constraints and options.
    Fields,
    /// Print the JSON Schema of the request or response body.
    Schema(SchemaArgs),
    /// Run the rule-based development backend.
    Serve(ServeArgs),
}

#[derive(Clone, Debug, Default, Args)]
pub struct FormArgs {
    /// Reject numbers that do not parse instead of substituting 0.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Clone, Debug, Default, Args)]
pub struct PredictArgs {
    /// Reject numbers that do not parse instead of substituting 0.
    #[arg(long)]
    pub strict: bool,

    #[arg(long)]
    pub age: Option<String>,
    #[arg(long)]
    pub workclass: Option<String>,
    /// Final weight.
    #[arg(long)]
    pub fnlwgt: Option<String>,
    #[arg(long)]
    pub education: Option<String>,
    /// Years of education.
    #[arg(long)]
    pub education_num: Option<String>,
    #[arg(long)]
    pub marital_status: Option<String>,
    #[arg(long)]
    pub occupation: Option<String>,
    #[arg(long)]
    pub relationship: Option<String>,
    #[arg(long)]
    pub race: Option<String>,
}

impl PredictArgs {
    /// Field values given on the command line, in catalog order.
    #[must_use]
    pub fn assignments(&self) -> Vec<(FieldId, &str)> {
        [
            (FieldId::Age, &self.age),
            (FieldId::Workclass, &self.workclass),
            (FieldId::Fnlwgt, &self.fnlwgt),
            (FieldId::Education, &self.education),
            (FieldId::EducationNum, &self.education_num),
            (FieldId::MaritalStatus, &self.marital_status),
            (FieldId::Occupation, &self.occupation),
            (FieldId::Relationship, &self.relationship),
            (FieldId::Race, &self.race),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|raw| (field, raw)))
        .collect()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaTarget {
    /// Body posted to the prediction endpoint.
    Request,
    /// Body returned on success.
    Response,
}

impl From<SchemaTarget> for SchemaKind {
    fn from(target: SchemaTarget) -> Self {
        match target {
            SchemaTarget::Request => Self::Request,
            SchemaTarget::Response => Self::Response,
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    pub target: SchemaTarget,
}

#[derive(Clone, Debug, Default, Args)]
pub struct ServeArgs {
    /// Address to listen on (defaults to `server.addr` from config).
    #[arg(long)]
    pub addr: Option<String>,
}
