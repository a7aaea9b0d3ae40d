//! The default kind-to-handler table.

use indent_lint_core::{HandlerCtor, HandlerRegistry, NodeKind};

use crate::aligned_decl::AlignedDeclHandler;
use crate::class_body::ClassBodyHandler;
use crate::enum_body::EnumBodyHandler;
use crate::namespace::NamespaceHandler;
use crate::pass::PassHandler;
use crate::switch_body::SwitchBodyHandler;

/// Builds the registry covering the whole node-kind catalogue.
///
/// # Panics
///
/// Panics if the constructor table fails completeness validation, which
/// would mean the table below and [`NodeKind::ALL`] have diverged.
#[must_use]
pub fn default_registry() -> HandlerRegistry {
    let mut builder = HandlerRegistry::builder();
    for &kind in NodeKind::ALL {
        builder = builder.register(kind, constructor_for(kind));
    }
    builder
        .build()
        .unwrap_or_else(|e| panic!("default handler registry must cover every node kind: {e}"))
}

/// The handler constructor for one node kind.
#[must_use]
pub fn constructor_for(kind: NodeKind) -> HandlerCtor {
    match kind {
        // Class-like brace blocks.
        NodeKind::ClassDecl
        | NodeKind::StructDecl
        | NodeKind::ClassTemplate
        | NodeKind::ClassTemplatePartialSpecialization => ClassBodyHandler::construct,

        // Namespace bodies.
        NodeKind::Namespace => NamespaceHandler::construct,

        // Enum bodies indent like class bodies.
        NodeKind::EnumDecl => EnumBodyHandler::construct,

        // Switch bodies have their own nesting flag.
        NodeKind::SwitchStmt => SwitchBodyHandler::construct,

        // Line-starting declarations with a direct alignment check.
        NodeKind::TypedefDecl | NodeKind::FieldDecl => AlignedDeclHandler::construct,

        // Declarations without a direct check.
        NodeKind::UnexposedDecl
        | NodeKind::UnionDecl
        | NodeKind::EnumConstantDecl
        | NodeKind::FunctionDecl
        | NodeKind::VarDecl
        | NodeKind::ParmDecl
        | NodeKind::CxxMethod
        | NodeKind::LinkageSpec
        | NodeKind::Constructor
        | NodeKind::Destructor
        | NodeKind::ConversionFunction
        | NodeKind::TemplateTypeParameter
        | NodeKind::TemplateNonTypeParameter
        | NodeKind::TemplateTemplateParameter
        | NodeKind::FunctionTemplate
        | NodeKind::NamespaceAlias
        | NodeKind::UsingDirective
        | NodeKind::UsingDeclaration
        | NodeKind::TypeAliasDecl
        | NodeKind::CxxAccessSpecDecl => PassHandler::construct,

        // Objective-C declarations.
        NodeKind::ObjcInterfaceDecl
        | NodeKind::ObjcCategoryDecl
        | NodeKind::ObjcProtocolDecl
        | NodeKind::ObjcPropertyDecl
        | NodeKind::ObjcIvarDecl
        | NodeKind::ObjcInstanceMethodDecl
        | NodeKind::ObjcClassMethodDecl
        | NodeKind::ObjcImplementationDecl
        | NodeKind::ObjcCategoryImplDecl
        | NodeKind::ObjcSynthesizeDecl
        | NodeKind::ObjcDynamicDecl => PassHandler::construct,

        // References.
        NodeKind::ObjcSuperClassRef
        | NodeKind::ObjcProtocolRef
        | NodeKind::ObjcClassRef
        | NodeKind::TypeRef
        | NodeKind::CxxBaseSpecifier
        | NodeKind::TemplateRef
        | NodeKind::NamespaceRef
        | NodeKind::MemberRef
        | NodeKind::LabelRef
        | NodeKind::OverloadedDeclRef => PassHandler::construct,

        // Error placeholders the parser may report.
        NodeKind::InvalidFile
        | NodeKind::NoDeclFound
        | NodeKind::NotImplemented
        | NodeKind::InvalidCode => PassHandler::construct,

        // Expressions.
        NodeKind::UnexposedExpr
        | NodeKind::DeclRefExpr
        | NodeKind::MemberRefExpr
        | NodeKind::CallExpr
        | NodeKind::ObjcMessageExpr
        | NodeKind::BlockExpr
        | NodeKind::IntegerLiteral
        | NodeKind::FloatingLiteral
        | NodeKind::ImaginaryLiteral
        | NodeKind::StringLiteral
        | NodeKind::CharacterLiteral
        | NodeKind::ParenExpr
        | NodeKind::UnaryOperator
        | NodeKind::ArraySubscriptExpr
        | NodeKind::BinaryOperator
        | NodeKind::CompoundAssignmentOperator
        | NodeKind::ConditionalOperator
        | NodeKind::CStyleCastExpr
        | NodeKind::CompoundLiteralExpr
        | NodeKind::InitListExpr
        | NodeKind::AddrLabelExpr
        | NodeKind::StmtExpr
        | NodeKind::GenericSelectionExpr
        | NodeKind::GnuNullExpr
        | NodeKind::CxxStaticCastExpr
        | NodeKind::CxxDynamicCastExpr
        | NodeKind::CxxReinterpretCastExpr
        | NodeKind::CxxConstCastExpr
        | NodeKind::CxxFunctionalCastExpr
        | NodeKind::CxxTypeidExpr
        | NodeKind::CxxBoolLiteralExpr
        | NodeKind::CxxNullPtrLiteralExpr
        | NodeKind::CxxThisExpr
        | NodeKind::CxxThrowExpr
        | NodeKind::CxxNewExpr
        | NodeKind::CxxDeleteExpr
        | NodeKind::CxxUnaryExpr
        | NodeKind::ObjcStringLiteral
        | NodeKind::ObjcEncodeExpr
        | NodeKind::ObjcSelectorExpr
        | NodeKind::ObjcProtocolExpr
        | NodeKind::ObjcBridgeCastExpr
        | NodeKind::PackExpansionExpr
        | NodeKind::SizeOfPackExpr => PassHandler::construct,

        // Statements.
        NodeKind::UnexposedStmt
        | NodeKind::LabelStmt
        | NodeKind::CompoundStmt
        | NodeKind::CaseStmt
        | NodeKind::DefaultStmt
        | NodeKind::IfStmt
        | NodeKind::WhileStmt
        | NodeKind::DoStmt
        | NodeKind::ForStmt
        | NodeKind::GotoStmt
        | NodeKind::IndirectGotoStmt
        | NodeKind::ContinueStmt
        | NodeKind::BreakStmt
        | NodeKind::ReturnStmt
        | NodeKind::AsmStmt
        | NodeKind::ObjcAtTryStmt
        | NodeKind::ObjcAtCatchStmt
        | NodeKind::ObjcAtFinallyStmt
        | NodeKind::ObjcAtThrowStmt
        | NodeKind::ObjcAtSynchronizedStmt
        | NodeKind::ObjcAutoreleasePoolStmt
        | NodeKind::ObjcForCollectionStmt
        | NodeKind::CxxCatchStmt
        | NodeKind::CxxTryStmt
        | NodeKind::CxxForRangeStmt
        | NodeKind::SehTryStmt
        | NodeKind::SehExceptStmt
        | NodeKind::SehFinallyStmt
        | NodeKind::NullStmt
        | NodeKind::DeclStmt => PassHandler::construct,

        // The root of a parsed file.
        NodeKind::TranslationUnit => PassHandler::construct,

        // Attributes.
        NodeKind::UnexposedAttr
        | NodeKind::IbActionAttr
        | NodeKind::IbOutletAttr
        | NodeKind::IbOutletCollectionAttr => PassHandler::construct,

        // Preprocessing entities.
        NodeKind::PreprocessingDirective
        | NodeKind::MacroDefinition
        | NodeKind::MacroInstantiation
        | NodeKind::InclusionDirective => PassHandler::construct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_covers_the_whole_catalogue() {
        let registry = default_registry();
        assert_eq!(registry.handler_count(), NodeKind::ALL.len());
        for &kind in NodeKind::ALL {
            assert!(registry.covers(kind), "uncovered kind: {kind}");
        }
    }
}
