// RENDER BACKENDS //////////////////////////////////////////////////////////////////
// This module contains the widget traits for rendering backends.
// Each backend provides its own consistent family of widgets,
// add other backends here as needed

use strum_macros::{Display, EnumIter};

pub trait Window {
    fn draw(&self) -> String;
}

pub trait Button {
    fn draw(&self) -> String;
}

pub trait Shader {
    fn compile(&self) -> String;
}

///////////////// OPENGL WIDGET FAMILY /////////////////////////

pub struct OpenGLWindow;

impl Window for OpenGLWindow {
    fn draw(&self) -> String {
        "[OpenGL] Window".to_string()
    }
}

pub struct OpenGLButton;

impl Button for OpenGLButton {
    fn draw(&self) -> String {
        "[OpenGL] Button".to_string()
    }
}

pub struct OpenGLShader;

impl Shader for OpenGLShader {
    fn compile(&self) -> String {
        "[OpenGL] Shader".to_string()
    }
}

///////////////// VULKAN WIDGET FAMILY /////////////////////////

pub struct VulkanWindow;

impl Window for VulkanWindow {
    fn draw(&self) -> String {
        "[Vulkan] Window".to_string()
    }
}

pub struct VulkanButton;

impl Button for VulkanButton {
    fn draw(&self) -> String {
        "[Vulkan] Button".to_string()
    }
}

pub struct VulkanShader;

impl Shader for VulkanShader {
    fn compile(&self) -> String {
        "[Vulkan] Shader".to_string()
    }
}

/////////////////////////////////////////////////////////////////////////////////////////
// FACTORY METHODS  ////////////////////////////////////////////////////////////////////
// Add an enum to represent different rendering backend types
#[derive(Debug, Clone, PartialEq, Display, EnumIter)]
pub enum RenderBackendType {
    OpenGL,
    Vulkan,
}

// Create a factory trait for widget families. Added &self to the trait methods to make them object-safe
pub trait RenderFactory: Send + Sync {
    // Send + Sync is needed for the factory method to be thread-safe
    fn create_window(&self) -> Box<dyn Window>;
    fn create_button(&self) -> Box<dyn Button>;
    fn create_shader(&self) -> Box<dyn Shader>;
}

// Implement factory for the OpenGL backend
pub struct OpenGLFactory;

impl RenderFactory for OpenGLFactory {
    fn create_window(&self) -> Box<dyn Window> {
        Box::new(OpenGLWindow)
    }

    fn create_button(&self) -> Box<dyn Button> {
        Box::new(OpenGLButton)
    }

    fn create_shader(&self) -> Box<dyn Shader> {
        Box::new(OpenGLShader)
    }
}

// Implement factory for the Vulkan backend
pub struct VulkanFactory;

impl RenderFactory for VulkanFactory {
    fn create_window(&self) -> Box<dyn Window> {
        Box::new(VulkanWindow)
    }

    fn create_button(&self) -> Box<dyn Button> {
        Box::new(VulkanButton)
    }

    fn create_shader(&self) -> Box<dyn Shader> {
        Box::new(VulkanShader)
    }
}

// factory method to create the appropriate factory based on backend type
pub fn get_render_factory(backend_type: RenderBackendType) -> &'static dyn RenderFactory {
    match backend_type {
        RenderBackendType::OpenGL => &OpenGLFactory,
        RenderBackendType::Vulkan => &VulkanFactory,
        // Add other backends here
    }
}

pub fn render_backend_from_string(backend_type: String) -> &'static dyn RenderFactory {
    match backend_type.as_str() {
        "opengl" => &OpenGLFactory,
        "vulkan" => &VulkanFactory,
        _ => panic!("Unknown render backend type"),
        // Add other backends here
    }
}

// Usage example:
// let factory = get_render_factory(RenderBackendType::OpenGL);
// let window = factory.create_window();
// println!("{}", window.draw());

//___________________________________TESTS____________________________________

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_backend_yields_its_own_family() {
        for backend in RenderBackendType::iter() {
            let name = backend.to_string();
            let factory = get_render_factory(backend);
            assert_eq!(factory.create_window().draw(), format!("[{}] Window", name));
            assert_eq!(factory.create_button().draw(), format!("[{}] Button", name));
            assert_eq!(
                factory.create_shader().compile(),
                format!("[{}] Shader", name)
            );
        }
    }

    #[test]
    fn test_opengl_family_is_consistent() {
        let factory = get_render_factory(RenderBackendType::OpenGL);
        assert_eq!(factory.create_window().draw(), "[OpenGL] Window");
        assert_eq!(factory.create_button().draw(), "[OpenGL] Button");
        assert_eq!(factory.create_shader().compile(), "[OpenGL] Shader");
    }

    #[test]
    fn test_vulkan_family_is_consistent() {
        let factory = get_render_factory(RenderBackendType::Vulkan);
        assert_eq!(factory.create_window().draw(), "[Vulkan] Window");
        assert_eq!(factory.create_button().draw(), "[Vulkan] Button");
        assert_eq!(factory.create_shader().compile(), "[Vulkan] Shader");
    }

    #[test]
    fn test_factory_swap_mid_scene() {
        let mut factory = get_render_factory(RenderBackendType::OpenGL);
        assert_eq!(factory.create_window().draw(), "[OpenGL] Window");
        factory = get_render_factory(RenderBackendType::Vulkan);
        assert_eq!(factory.create_shader().compile(), "[Vulkan] Shader");
        assert_eq!(factory.create_window().draw(), "[Vulkan] Window");
    }

    #[test]
    fn test_render_backend_from_string() {
        let factory = render_backend_from_string("vulkan".to_string());
        assert_eq!(factory.create_button().draw(), "[Vulkan] Button");
    }

    #[test]
    #[should_panic(expected = "Unknown render backend type")]
    fn test_unknown_backend_panics() {
        render_backend_from_string("directx".to_string());
    }

    #[test]
    fn test_backend_type_display() {
        assert_eq!(RenderBackendType::OpenGL.to_string(), "OpenGL");
        assert_eq!(RenderBackendType::Vulkan.to_string(), "Vulkan");
    }
}
