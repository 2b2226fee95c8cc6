use std::path::{Path, PathBuf};

use base64::Engine as _;
use clap::{Parser, Subcommand};

use face_console::api::{ApiClient, FacesResponse};
use face_console::canvas::{resize_canvas, Canvas};
use face_console::config::Config;

/// face-console: command-line client for the facial-recognition backend
#[derive(Parser)]
#[command(name = "face-console")]
#[command(version, about = "Command-line client for the facial-recognition backend")]
#[command(after_help = "EXAMPLES:
    # Check that the backend is up
    face-console probe

    # List registered people
    face-console people

    # Register a face from a photo
    face-console register \"Maria Clara\" photo.jpg

    # Recognize faces in a photo
    face-console recognize group.jpg

    # Shrink a photo to fit 640x480 before uploading
    face-console resize large.jpg small.png")]
struct Cli {
    /// Backend base URL (overrides the config file)
    #[arg(long, short = 's', global = true)]
    server: Option<String>,

    /// Path to the config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether the backend is reachable
    Probe,

    /// List the names of all registered people
    People,

    /// Register a person's face from an image file
    Register {
        /// Name of the person (at least 2 characters after trimming)
        name: String,
        /// Path to the image file (PNG or JPEG)
        image: PathBuf,
    },

    /// Recognize known faces in an image file
    Recognize {
        /// Path to the image file (PNG or JPEG)
        image: PathBuf,
    },

    /// Detect face locations in an image file without matching names
    Detect {
        /// Path to the image file (PNG or JPEG)
        image: PathBuf,
    },

    /// Resize an image to fit within bounds, preserving aspect ratio
    Resize {
        /// Path to the source image
        input: PathBuf,
        /// Path to write the resized image to
        output: PathBuf,
        /// Maximum output width in pixels (config default: 640)
        #[arg(long)]
        max_width: Option<u32>,
        /// Maximum output height in pixels (config default: 480)
        #[arg(long)]
        max_height: Option<u32>,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let base_url = cli
        .server
        .unwrap_or_else(|| config.server.base_url().to_string());
    let client = ApiClient::with_base_url(base_url);

    let result = match cli.command {
        Commands::Probe => run_probe(&client),
        Commands::People => run_people(&client),
        Commands::Register { name, image } => run_register(&client, &name, &image),
        Commands::Recognize { image } => run_recognize(&client, &image),
        Commands::Detect { image } => run_detect(&client, &image),
        Commands::Resize {
            input,
            output,
            max_width,
            max_height,
        } => run_resize(
            &input,
            &output,
            max_width.unwrap_or(config.canvas.max_width),
            max_height.unwrap_or(config.canvas.max_height),
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_probe(client: &ApiClient) -> Result<(), String> {
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| format!("Failed to create async runtime: {}", e))?;

    let reachable = rt.block_on(client.check_connectivity());
    if reachable {
        println!("Server reachable at {}", client.base_url());
        Ok(())
    } else {
        Err(format!("server at {} is not reachable", client.base_url()))
    }
}

fn run_people(client: &ApiClient) -> Result<(), String> {
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| format!("Failed to create async runtime: {}", e))?;

    let people = rt
        .block_on(client.list_people())
        .map_err(|e| e.to_string())?;

    if people.is_empty() {
        println!("No people registered yet.");
    } else {
        println!("{} registered:", people.len());
        for name in people {
            println!("  - {}", name);
        }
    }
    Ok(())
}

fn run_register(client: &ApiClient, name: &str, image: &Path) -> Result<(), String> {
    let data_url = image_to_data_url(image)?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| format!("Failed to create async runtime: {}", e))?;

    let message = rt
        .block_on(client.register_face(name, &data_url))
        .map_err(|e| e.to_string())?;
    println!("{}", message);
    Ok(())
}

fn run_recognize(client: &ApiClient, image: &Path) -> Result<(), String> {
    let data_url = image_to_data_url(image)?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| format!("Failed to create async runtime: {}", e))?;

    let response = rt
        .block_on(client.recognize_faces(&data_url))
        .map_err(|e| e.to_string())?;
    print_faces(&response, true);
    Ok(())
}

fn run_detect(client: &ApiClient, image: &Path) -> Result<(), String> {
    let data_url = image_to_data_url(image)?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| format!("Failed to create async runtime: {}", e))?;

    let response = rt
        .block_on(client.detect_faces(&data_url))
        .map_err(|e| e.to_string())?;
    print_faces(&response, false);
    Ok(())
}

fn print_faces(response: &FacesResponse, with_names: bool) {
    if response.faces.is_empty() {
        println!("No faces found.");
        return;
    }
    println!("{} face(s) found:", response.faces.len());
    for face in &response.faces {
        let loc = face.location;
        if with_names {
            let name = face.name.as_deref().unwrap_or("?");
            println!(
                "  {} at (top={}, right={}, bottom={}, left={})",
                name, loc.top, loc.right, loc.bottom, loc.left
            );
        } else {
            println!(
                "  face at (top={}, right={}, bottom={}, left={})",
                loc.top, loc.right, loc.bottom, loc.left
            );
        }
    }
}

fn run_resize(input: &Path, output: &Path, max_width: u32, max_height: u32) -> Result<(), String> {
    if max_width == 0 || max_height == 0 {
        return Err("maximum width and height must be greater than 0".to_string());
    }

    let decoded = image::open(input)
        .map_err(|e| format!("Failed to open image '{}': {}", input.display(), e))?
        .to_rgb8();
    let (width, height) = decoded.dimensions();
    let source = Canvas::from_rgb(width, height, decoded.into_raw())
        .map_err(|e| e.to_string())?;

    let resized = resize_canvas(&source, max_width, max_height);
    println!(
        "{}x{} -> {}x{}",
        source.width, source.height, resized.width, resized.height
    );

    let out_image = image::RgbImage::from_raw(resized.width, resized.height, resized.data)
        .ok_or_else(|| "resized buffer has unexpected length".to_string())?;
    out_image
        .save(output)
        .map_err(|e| format!("Failed to write image '{}': {}", output.display(), e))?;
    println!("Wrote {}", output.display());
    Ok(())
}

/// Encode an image file as the base64 data URL format the backend expects
/// (`data:<mime>;base64,<payload>`; the server splits on the comma).
fn image_to_data_url(path: &Path) -> Result<String, String> {
    let bytes = std::fs::read(path)
        .map_err(|e| format!("Failed to read image '{}': {}", path.display(), e))?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    Ok(format!("data:{};base64,{}", mime, encoded))
}
