use clap::Args;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Contact name
    #[arg(short = 'n', long)]
    pub name: String,

    /// Age in years
    #[arg(short = 'a', long)]
    pub age: u32,

    /// Email address
    #[arg(short = 'e', long)]
    pub email: String,

    /// Phone number
    #[arg(short = 'p', long)]
    pub phone: String,

    /// Free-form notes
    #[arg(long, default_value = "")]
    pub notes: String,
}
