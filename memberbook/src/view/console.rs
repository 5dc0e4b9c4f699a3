//! Interactive menu
//!
//! Thin I/O shell: collects operator input, calls the member service and
//! renders success/failure/empty feedback. No data access happens here.

use std::io::{self, Write};

use shared::models::{Member, MemberCreate, MemberUpdate};

use crate::config::Config;
use crate::error::DbError;
use crate::service::members;

pub async fn run(config: &Config) -> io::Result<()> {
    loop {
        println!();
        println!("===== Member Manager =====");
        println!("1. Register member");
        println!("2. List all members");
        println!("3. Find member by id");
        println!("4. Find members by name keyword");
        println!("5. Update member");
        println!("6. Delete member");
        println!("0. Exit");

        match prompt("> ")?.as_str() {
            "1" => register(config).await?,
            "2" => list_all(config).await,
            "3" => find_by_id(config).await?,
            "4" => find_by_name(config).await?,
            "5" => update(config).await?,
            "6" => delete(config).await?,
            "0" => {
                println!("Bye.");
                return Ok(());
            }
            other => println!("Unknown menu choice: {other}"),
        }
    }
}

async fn register(config: &Config) -> io::Result<()> {
    let user_id = prompt("id: ")?;
    let user_pwd = prompt("password: ")?;
    let user_name = prompt("name: ")?;
    let gender = prompt("gender (M/F): ")?.to_uppercase();
    let age = match prompt("age: ")?.parse::<i64>() {
        Ok(age) => age,
        Err(_) => {
            println!("Age must be a number; registration cancelled.");
            return Ok(());
        }
    };
    let email = prompt("email: ")?;
    let phone = prompt("phone: ")?;
    let address = prompt("address: ")?;
    let hobby = prompt("hobbies (comma-separated): ")?;

    let member = MemberCreate {
        user_id,
        user_pwd,
        user_name,
        gender,
        age,
        email,
        phone,
        address,
        hobby,
    };

    match members::create(&config.database, &member).await {
        Ok(rows) if rows > 0 => println!("Member registered."),
        Ok(_) => println!("That id is already taken."),
        Err(e) => render_error(&e),
    }
    Ok(())
}

async fn list_all(config: &Config) {
    match members::list_all(&config.database).await {
        Ok(list) if list.is_empty() => println!("No members yet."),
        Ok(list) => {
            for m in &list {
                print_member(m);
            }
        }
        Err(e) => render_error(&e),
    }
}

async fn find_by_id(config: &Config) -> io::Result<()> {
    let user_id = prompt("id to find: ")?;
    match members::find_by_id(&config.database, &user_id).await {
        Ok(Some(m)) => print_member(&m),
        Ok(None) => println!("No member with id '{user_id}'."),
        Err(e) => render_error(&e),
    }
    Ok(())
}

async fn find_by_name(config: &Config) -> io::Result<()> {
    let keyword = prompt("name keyword: ")?;
    match members::find_by_name(&config.database, &keyword).await {
        Ok(list) if list.is_empty() => println!("No members matching '{keyword}'."),
        Ok(list) => {
            for m in &list {
                print_member(m);
            }
        }
        Err(e) => render_error(&e),
    }
    Ok(())
}

async fn update(config: &Config) -> io::Result<()> {
    let user_id = prompt("id to update: ")?;
    let user_pwd = prompt("new password: ")?;
    let email = prompt("new email: ")?;
    let phone = prompt("new phone: ")?;
    let address = prompt("new address: ")?;

    let member = MemberUpdate {
        user_id,
        user_pwd,
        email,
        phone,
        address,
    };

    match members::update(&config.database, &member).await {
        Ok(rows) if rows > 0 => println!("Member updated."),
        Ok(_) => println!("No member with that id."),
        Err(e) => render_error(&e),
    }
    Ok(())
}

async fn delete(config: &Config) -> io::Result<()> {
    let user_id = prompt("id to delete: ")?;
    let user_pwd = prompt("current password: ")?;

    match members::delete(&config.database, &user_id, &user_pwd).await {
        Ok(rows) if rows > 0 => println!("Member deleted."),
        Ok(_) => println!("No member matched that id and password."),
        Err(e) => render_error(&e),
    }
    Ok(())
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn print_member(m: &Member) {
    println!(
        "[{}] {} | {} | {} | {} | {} | {} | {} | {} | joined {}",
        m.user_no,
        m.user_id,
        m.user_name,
        m.gender,
        m.age,
        m.email,
        m.phone,
        m.address,
        m.hobby,
        m.enroll_date
    );
}

fn render_error(e: &DbError) {
    tracing::error!(error = %e, "member operation failed");
    println!("Operation failed: {e}");
}
