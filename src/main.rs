// employee-store command line.
// Composition root: wires config, logging, the API client, and session storage into the store.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use employee_store::{
    Config, Employee, EmployeeApiClient, EmployeeStore, FileSessionStorage, Result, logging,
};

#[derive(Debug, Parser)]
#[command(name = "employee-store", version, about = "Browse employees from the employee web API")]
struct Cli {
    /// API base URL (overrides EMP_WEBAPI_URL).
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Session storage directory (overrides EMP_SESSION_DIR).
    #[arg(long, global = true)]
    session_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List all employees, most recently hired first.
    List,
    /// Show one employee by id.
    Show { id: i64 },
    /// List employees whose name contains TEXT (case-sensitive).
    Search { text: String },
    /// Mark the session as logged in.
    Login,
    /// Mark the session as logged out.
    Logout,
    /// Print whether the session is logged in.
    Status,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_lookup(|name| match name {
        employee_store::config::BASE_URL_VAR => {
            cli.base_url.clone().or_else(|| std::env::var(name).ok())
        }
        employee_store::config::SESSION_DIR_VAR => cli
            .session_dir
            .as_ref()
            .map(|dir| dir.display().to_string())
            .or_else(|| std::env::var(name).ok()),
        _ => std::env::var(name).ok(),
    })?;
    logging::init(&config.log_filter)?;

    let client = EmployeeApiClient::new(config.api_base_url.clone())?;
    let storage = match &config.session_dir {
        Some(dir) => FileSessionStorage::new(dir),
        None => FileSessionStorage::in_default_dir()?,
    };
    tracing::debug!(session_dir = %storage.dir().display(), "session storage");

    let mut store = EmployeeStore::new(client, storage);

    match cli.command {
        Command::List => {
            store.fetch_employees().await?;
            println!("{} employees", store.all_employee_count());
            for employee in store.all_employees() {
                print_row(employee);
            }
        }
        Command::Show { id } => {
            store.fetch_employees().await?;
            match store.employee_by_id(id) {
                Some(employee) => print_detail(employee),
                None => println!("employee {id} not found"),
            }
        }
        Command::Search { text } => {
            store.fetch_employees().await?;
            let hits = store.employees_by_name_substring(&text);
            println!("{} matching employees", hits.len());
            for employee in hits {
                print_row(employee);
            }
        }
        Command::Login => {
            store.set_logged_in();
            println!("logged in");
        }
        Command::Logout => {
            store.set_logged_out();
            println!("logged out");
        }
        Command::Status => {
            let status = if store.is_logged_in() { "logged in" } else { "logged out" };
            println!("{status}");
        }
    }

    Ok(())
}

fn print_row(employee: &Employee) {
    println!(
        "{:>6}  {}  {}",
        employee.id,
        employee.formatted_hire_date(),
        employee.name
    );
}

fn print_detail(employee: &Employee) {
    println!("id:              {}", employee.id);
    println!("name:            {}", employee.name);
    println!("image:           {}", employee.image);
    println!("gender:          {}", employee.gender);
    println!("hire date:       {}", employee.formatted_hire_date());
    println!("mail address:    {}", employee.mail_address);
    println!("zip code:        {}", employee.zip_code);
    println!("address:         {}", employee.address);
    println!("telephone:       {}", employee.telephone);
    println!("salary:          {}", employee.salary);
    println!("characteristics: {}", employee.characteristics);
    println!("dependents:      {}", employee.dependents_count);
}
