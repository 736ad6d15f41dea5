use super::{TargetSyntax, Type, Visibility};

fn visibility_keyword(visibility: Visibility) -> &'static str {
    match visibility {
        Visibility::Public => "public",
        Visibility::Private => "private",
    }
}

/// Java output.
#[derive(Clone, Copy, Debug, Default)]
pub struct Java;

impl TargetSyntax for Java {
    fn name(&self) -> &'static str {
        "java"
    }

    fn extension(&self) -> &'static str {
        "java"
    }

    fn type_name(&self, ty: &Type) -> String {
        match ty {
            Type::Int => "int".to_string(),
            Type::Char => "char".to_string(),
            Type::Boolean => "boolean".to_string(),
            Type::String => "String".to_string(),
            Type::Array(element) => format!("{} []", self.type_name(element)),
        }
    }

    fn field(
        &self,
        visibility: Visibility,
        is_static: bool,
        mutable: bool,
        ty: &Type,
        name: &str,
        initial: &str,
    ) -> String {
        let mut out = String::from(visibility_keyword(visibility));
        out.push(' ');
        if is_static {
            out.push_str("static ");
        }
        if !mutable {
            out.push_str("final ");
        }
        out.push_str(&format!("{} {name} = {initial}", self.type_name(ty)));
        out
    }

    fn formal(&self, ty: &Type, name: &str) -> String {
        format!("final {} {name}", self.type_name(ty))
    }

    fn local(&self, mutable: bool, ty: &Type, name: &str, initial: &str) -> String {
        let modifier = if mutable { "" } else { "final " };
        format!("{modifier}{} {name} = {initial}", self.type_name(ty))
    }

    fn method_header(
        &self,
        visibility: Visibility,
        ret: &Type,
        name: &str,
        params: &[String],
    ) -> String {
        format!(
            "{} static {} {name}({})",
            visibility_keyword(visibility),
            self.type_name(ret),
            params.join(", ")
        )
    }

    fn statement(&self, stmt: &str) -> String {
        format!("{stmt};")
    }

    fn conditional(&self, cond: &str, if_true: &str, if_false: &str) -> String {
        format!("{cond} ? {if_true} : {if_false}")
    }

    fn new_array(&self, element: &Type, size: &str) -> String {
        format!("new {}[{size}]", self.type_name(element))
    }

    fn array_index(&self, array: &str, index: &str) -> String {
        format!("{array}[{index}]")
    }

    fn array_literal_start(&self, _element: &Type) -> String {
        "{".to_string()
    }

    fn array_literal_stop(&self) -> String {
        "}".to_string()
    }

    fn switch_header(&self, expr: &str) -> String {
        format!("switch ({expr}) ")
    }

    fn start_case(&self, value: &str) -> String {
        format!("case {value}:\n")
    }

    fn add_case(&self, value: &str) -> String {
        self.start_case(value)
    }

    fn gen_default(&self) -> String {
        "default:\n".to_string()
    }

    fn start_case_body(&self) -> String {
        String::new()
    }

    // Every body ends in a labelled break; a trailing `break;` would be unreachable.
    fn end_case_body(&self) -> String {
        String::new()
    }

    fn start_label_block(&self, name: &str) -> String {
        format!("{name}: {{")
    }

    fn break_block(&self, name: &str) -> String {
        format!("break {name}")
    }

    fn end_label_block(&self, _name: &str) -> String {
        "}".to_string()
    }
}
