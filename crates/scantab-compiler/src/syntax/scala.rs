use super::{TargetSyntax, Type, Visibility};

/// Scala output.
///
/// Labelled blocks become `try`/`catch` around a `ZZbreak` exception that the
/// skeleton defines.
#[derive(Clone, Copy, Debug, Default)]
pub struct Scala;

impl TargetSyntax for Scala {
    fn name(&self) -> &'static str {
        "scala"
    }

    fn extension(&self) -> &'static str {
        "scala"
    }

    fn type_name(&self, ty: &Type) -> String {
        match ty {
            Type::Int => "Int".to_string(),
            Type::Char => "Char".to_string(),
            Type::Boolean => "Boolean".to_string(),
            Type::String => "String".to_string(),
            Type::Array(element) => format!("Array[{}]", self.type_name(element)),
        }
    }

    fn field(
        &self,
        visibility: Visibility,
        _is_static: bool,
        mutable: bool,
        ty: &Type,
        name: &str,
        initial: &str,
    ) -> String {
        let base = self.local(mutable, ty, name, initial);
        match visibility {
            Visibility::Public => base,
            Visibility::Private => format!("private {base}"),
        }
    }

    fn formal(&self, ty: &Type, name: &str) -> String {
        format!("{name}:{}", self.type_name(ty))
    }

    fn local(&self, mutable: bool, ty: &Type, name: &str, initial: &str) -> String {
        let keyword = if mutable { "var" } else { "val" };
        format!("{keyword} {name}:{} = {initial}", self.type_name(ty))
    }

    fn method_header(
        &self,
        visibility: Visibility,
        ret: &Type,
        name: &str,
        params: &[String],
    ) -> String {
        let prefix = match visibility {
            Visibility::Public => "",
            Visibility::Private => "private ",
        };
        format!(
            "{prefix}def {name}({}) : {} =",
            params.join(", "),
            self.type_name(ret)
        )
    }

    fn statement(&self, stmt: &str) -> String {
        stmt.to_string()
    }

    fn conditional(&self, cond: &str, if_true: &str, if_false: &str) -> String {
        format!("if ( {cond} ) {if_true} else {if_false}")
    }

    fn new_array(&self, element: &Type, size: &str) -> String {
        format!("new Array[{}]({size})", self.type_name(element))
    }

    fn array_index(&self, array: &str, index: &str) -> String {
        format!("{array}({index})")
    }

    fn array_literal_start(&self, _element: &Type) -> String {
        "Array(".to_string()
    }

    fn array_literal_stop(&self) -> String {
        ")".to_string()
    }

    fn switch_header(&self, expr: &str) -> String {
        format!("({expr}) match ")
    }

    fn start_case(&self, value: &str) -> String {
        format!("case {value}")
    }

    fn add_case(&self, value: &str) -> String {
        format!("|{value}")
    }

    fn gen_default(&self) -> String {
        "case _".to_string()
    }

    fn start_case_body(&self) -> String {
        " => {".to_string()
    }

    fn end_case_body(&self) -> String {
        "}".to_string()
    }

    fn start_label_block(&self, name: &str) -> String {
        format!("/*{name}:*/ try {{")
    }

    fn break_block(&self, name: &str) -> String {
        format!("throw ZZbreak(\"{name}\")")
    }

    fn end_label_block(&self, name: &str) -> String {
        format!("}} catch {{ case ZZbreak(\"{name}\") => () }}")
    }

    // Scala rewrites unicode escapes while reading and rejects octal ones,
    // so quotes, newline and low control codes need their own forms.
    fn unit_literal(&self, unit: u16) -> String {
        match unit {
            10 => "\\n".to_string(),
            0..=31 | 0x7f.. => format!("\\u{unit:04x}"),
            _ => {
                let c = char::from(unit as u8);
                if matches!(c, '\'' | '"' | '\\') {
                    format!("\\{c}")
                } else {
                    c.to_string()
                }
            }
        }
    }
}
